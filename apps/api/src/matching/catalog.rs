//! Skill Catalog — the closed vocabulary of canonical skills.
//!
//! Each `Skill` variant carries its canonical identifier, an ordered alias set and an
//! optional display-name override. Declaration order is the catalog order: extraction,
//! canonicalization and the matched-skill list all follow it, and `Ord` on `Skill`
//! agrees with it so ordered collections iterate in catalog order.
//!
//! The compiled side of the catalog (alias patterns, lookup indexes, display names) is
//! built once on first use and is read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::matching::alias::AliasPattern;

macro_rules! skill_catalog {
    (
        $(
            $variant:ident => $id:literal $(as $display:literal)? : [$($alias:literal),+ $(,)?]
        ),+ $(,)?
    ) => {
        /// A canonical skill. One variant per catalog entry, in catalog order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Skill {
            $($variant),+
        }

        impl Skill {
            /// Every skill, in catalog order.
            pub const ALL: &'static [Skill] = &[$(Skill::$variant),+];

            /// The canonical identifier: normalized, lowercase.
            pub fn id(self) -> &'static str {
                match self {
                    $(Skill::$variant => $id),+
                }
            }

            /// Alternate surface forms, in match-priority order.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Skill::$variant => &[$($alias),+]),+
                }
            }

            fn display_override(self) -> Option<&'static str> {
                match self {
                    $(Skill::$variant => skill_catalog!(@display $($display)?)),+
                }
            }
        }
    };
    (@display $display:literal) => { Some($display) };
    (@display) => { None };
}

skill_catalog! {
    // Languages
    Python => "python": ["python"],
    JavaScript => "javascript": ["javascript", "js"],
    TypeScript => "typescript": ["typescript", "ts"],
    Java => "java": ["java"],
    Cpp => "c++" as "C++": ["c++"],
    CSharp => "c#" as "C#": ["c#", ".net", "dotnet"],
    Go => "go": ["go", "golang"],
    Rust => "rust": ["rust"],
    Php => "php": ["php"],
    Ruby => "ruby": ["ruby", "ruby on rails", "rails"],
    Swift => "swift": ["swift"],
    Kotlin => "kotlin": ["kotlin"],

    // Web
    React => "react": ["react", "react.js", "reactjs"],
    Vue => "vue": ["vue", "vue.js", "vuejs"],
    Angular => "angular": ["angular"],
    NodeJs => "node.js" as "Node.js": ["node.js", "node", "nodejs"],
    Express => "express": ["express", "express.js"],
    Django => "django": ["django"],
    Flask => "flask": ["flask"],
    FastApi => "fastapi": ["fastapi"],

    // Databases
    Sql => "sql" as "SQL": ["sql"],
    PostgreSql => "postgresql" as "PostgreSQL": ["postgresql", "postgres"],
    MySql => "mysql": ["mysql"],
    Sqlite => "sqlite": ["sqlite"],
    MongoDb => "mongodb" as "MongoDB": ["mongodb", "mongo"],
    Redis => "redis": ["redis"],
    Oracle => "oracle": ["oracle"],
    DynamoDb => "dynamodb": ["dynamodb"],

    // DevOps & cloud
    Docker => "docker": ["docker"],
    Kubernetes => "kubernetes": ["kubernetes", "k8s"],
    Aws => "aws" as "AWS": ["aws", "amazon web services"],
    Azure => "azure": ["azure", "microsoft azure"],
    Gcp => "gcp" as "GCP": ["gcp", "google cloud", "google cloud platform"],
    Terraform => "terraform": ["terraform"],
    Jenkins => "jenkins": ["jenkins"],
    Git => "git": ["git", "github", "gitlab", "bitbucket"],
    CiCd => "ci/cd" as "CI/CD": [
        "ci/cd",
        "cicd",
        "continuous integration",
        "continuous delivery",
        "continuous deployment",
    ],
    Linux => "linux": ["linux", "ubuntu", "debian", "centos"],
    Bash => "bash": ["bash", "shell", "shell scripting"],
    Nginx => "nginx": ["nginx"],
    Apache => "apache": ["apache", "httpd"],

    // Data & ML
    MachineLearning => "machine learning": ["machine learning", "ml"],
    DeepLearning => "deep learning": ["deep learning", "dl"],
    TensorFlow => "tensorflow": ["tensorflow"],
    PyTorch => "pytorch": ["pytorch"],
    ScikitLearn => "scikit-learn": ["scikit-learn", "sklearn"],
    Pandas => "pandas": ["pandas"],
    NumPy => "numpy": ["numpy"],
    DataScience => "data science": ["data science", "data scientist"],
    Nlp => "nlp" as "NLP": ["nlp", "natural language processing"],
    ComputerVision => "computer vision": ["computer vision", "cv"],
    OpenCv => "opencv": ["opencv"],
    Keras => "keras": ["keras"],

    // Concepts & tools
    RestApi => "rest api" as "REST API": ["rest", "restful", "rest api"],
    GraphQl => "graphql": ["graphql"],
    Microservices => "microservices": ["microservices", "micro-service", "micro service"],
    Backend => "backend": ["backend", "back-end", "back end"],
    Frontend => "frontend": ["frontend", "front-end", "front end"],
    FullStack => "full stack": ["full stack", "full-stack"],
    Orm => "orm": ["orm", "sequelize", "typeorm", "hibernate", "sqlalchemy"],
    Jwt => "jwt" as "JWT": ["jwt", "json web token"],
    OAuth => "oauth" as "OAuth": ["oauth", "oauth2", "oauth 2.0"],
    Testing => "testing": [
        "testing",
        "unit testing",
        "integration testing",
        "end to end",
        "e2e",
    ],
    Pytest => "pytest": ["pytest"],
    Jest => "jest": ["jest"],
    Mocha => "mocha": ["mocha"],
    Agile => "agile": ["agile"],
    Scrum => "scrum": ["scrum"],
}

impl Skill {
    /// Human-presentable name: the explicit override, else the title-cased identifier.
    pub fn display_name(self) -> &'static str {
        &catalog().entry(self).display
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Same alias claimed by two skills. The earlier skill in catalog order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: &'static str,
    pub kept: Skill,
    pub shadowed: Skill,
}

/// Compiled form of one skill.
#[derive(Debug)]
pub struct CatalogEntry {
    pub skill: Skill,
    pub display: String,
    pub patterns: Vec<AliasPattern>,
}

#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_identifier: HashMap<&'static str, Skill>,
    by_alias: HashMap<&'static str, Skill>,
    collisions: Vec<AliasCollision>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

/// The process-wide catalog. First call compiles it; later calls are lock-free reads.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

impl Catalog {
    fn build() -> Self {
        let mut entries = Vec::with_capacity(Skill::ALL.len());
        let mut by_identifier = HashMap::with_capacity(Skill::ALL.len());
        let mut by_alias: HashMap<&'static str, Skill> = HashMap::new();
        let mut collisions = Vec::new();

        for &skill in all_skills() {
            by_identifier.insert(skill.id(), skill);

            for &alias in aliases_of(skill) {
                match by_alias.get(alias) {
                    Some(&kept) if kept != skill => collisions.push(AliasCollision {
                        alias,
                        kept,
                        shadowed: skill,
                    }),
                    Some(_) => {}
                    None => {
                        by_alias.insert(alias, skill);
                    }
                }
            }

            let patterns = aliases_of(skill)
                .iter()
                .map(|&alias| {
                    AliasPattern::new(alias).expect("catalog aliases compile as escaped literals")
                })
                .collect();

            let display = skill
                .display_override()
                .map(str::to_string)
                .unwrap_or_else(|| title_case(skill.id()));

            entries.push(CatalogEntry {
                skill,
                display,
                patterns,
            });
        }

        for collision in &collisions {
            warn!(
                alias = collision.alias,
                kept = collision.kept.id(),
                shadowed = collision.shadowed.id(),
                "Alias claimed by two skills; earlier catalog entry wins"
            );
        }

        debug!(
            skills = entries.len(),
            aliases = by_alias.len(),
            "Skill catalog compiled"
        );

        Catalog {
            entries,
            by_identifier,
            by_alias,
            collisions,
        }
    }

    /// Compiled entries in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, skill: Skill) -> &CatalogEntry {
        &self.entries[skill.index()]
    }

    /// Skill whose canonical identifier is exactly `identifier`.
    pub fn skill_for_identifier(&self, identifier: &str) -> Option<Skill> {
        self.by_identifier.get(identifier).copied()
    }

    /// Skill owning `alias`, first catalog-order owner on collision.
    pub fn skill_for_alias(&self, alias: &str) -> Option<Skill> {
        self.by_alias.get(alias).copied()
    }

    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }
}

/// Ordered aliases of a skill.
pub fn aliases_of(skill: Skill) -> &'static [&'static str] {
    skill.aliases()
}

/// Display name of a skill.
pub fn display_name_of(skill: Skill) -> &'static str {
    skill.display_name()
}

/// All skills in catalog order.
pub fn all_skills() -> &'static [Skill] {
    Skill::ALL
}

/// Upper-cases a letter that follows a non-letter and lower-cases the rest,
/// so "machine learning" becomes "Machine Learning" and "e2e" becomes "E2E".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize;
    use std::collections::HashSet;

    #[test]
    fn test_all_skills_in_declaration_order() {
        let skills = all_skills();
        assert_eq!(skills.first(), Some(&Skill::Python));
        assert_eq!(skills.last(), Some(&Skill::Scrum));
        assert!(skills.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entries_index_matches_skill() {
        for &skill in all_skills() {
            assert_eq!(catalog().entry(skill).skill, skill);
            assert_eq!(catalog().entry(skill).patterns.len(), skill.aliases().len());
        }
    }

    #[test]
    fn test_identifiers_unique_and_normalized() {
        let mut seen = HashSet::new();
        for &skill in all_skills() {
            assert!(seen.insert(skill.id()), "duplicate id {}", skill.id());
            assert_eq!(normalize(skill.id()), skill.id());
        }
    }

    #[test]
    fn test_aliases_normalized_and_unique_within_skill() {
        for &skill in all_skills() {
            let mut seen = HashSet::new();
            for &alias in aliases_of(skill) {
                assert_eq!(normalize(alias), alias, "alias {alias} is not normalized");
                assert!(seen.insert(alias), "alias {alias} repeated in {}", skill.id());
            }
        }
    }

    #[test]
    fn test_shipped_catalog_has_no_alias_collisions() {
        assert!(catalog().collisions().is_empty(), "{:?}", catalog().collisions());
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(catalog().skill_for_alias("k8s"), Some(Skill::Kubernetes));
        assert_eq!(catalog().skill_for_alias("golang"), Some(Skill::Go));
        assert_eq!(catalog().skill_for_alias("dotnet"), Some(Skill::CSharp));
        assert_eq!(catalog().skill_for_alias("front-end"), Some(Skill::Frontend));
        assert_eq!(catalog().skill_for_alias("cobol"), None);
    }

    #[test]
    fn test_display_name_override() {
        assert_eq!(display_name_of(Skill::NodeJs), "Node.js");
        assert_eq!(display_name_of(Skill::PostgreSql), "PostgreSQL");
        assert_eq!(display_name_of(Skill::CiCd), "CI/CD");
    }

    #[test]
    fn test_display_name_defaults_to_title_case() {
        assert_eq!(display_name_of(Skill::Python), "Python");
        assert_eq!(display_name_of(Skill::MachineLearning), "Machine Learning");
        assert_eq!(display_name_of(Skill::ScikitLearn), "Scikit-Learn");
        assert_eq!(display_name_of(Skill::FullStack), "Full Stack");
    }

    #[test]
    fn test_title_case_digits_break_words() {
        assert_eq!(title_case("e2e"), "E2E");
        assert_eq!(title_case("oauth 2.0"), "Oauth 2.0");
        assert_eq!(title_case(""), "");
    }
}
