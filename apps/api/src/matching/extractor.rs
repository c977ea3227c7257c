//! Skill Extractor — which catalog skills a free text mentions.

use std::collections::BTreeSet;

use crate::matching::catalog::{catalog, display_name_of, title_case, Skill};
use crate::matching::normalize::normalize;

/// Canonical skills with at least one alias occurrence in `text`, in catalog order.
pub fn extract_skills(text: &str) -> BTreeSet<Skill> {
    let normalized = normalize(text);
    catalog()
        .entries()
        .iter()
        .filter(|entry| entry.patterns.iter().any(|p| p.is_found_in(&normalized)))
        .map(|entry| entry.skill)
        .collect()
}

/// Display names of the skills found in `text`, sorted by canonical identifier.
///
/// This is the form the resume parser hands back to clients.
pub fn extract_skill_names(text: &str) -> Vec<String> {
    let mut found: Vec<Skill> = extract_skills(text).into_iter().collect();
    found.sort_by_key(|skill| skill.id());
    found
        .into_iter()
        .map(|skill| canonical_to_display(skill.id()))
        .collect()
}

/// Presentation lookup for any identifier. Uncataloged identifiers are title-cased.
pub fn canonical_to_display(identifier: &str) -> String {
    match catalog().skill_for_identifier(identifier) {
        Some(skill) => display_name_of(skill).to_string(),
        None => title_case(identifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert!(extract_skills("Node.JS developer").contains(&Skill::NodeJs));
        assert!(extract_skills("node js developer").contains(&Skill::NodeJs));
        assert!(extract_skills("NODEJS!").contains(&Skill::NodeJs));
    }

    #[test]
    fn test_java_not_found_in_javascript() {
        let found = extract_skills("javascript");
        assert!(found.contains(&Skill::JavaScript));
        assert!(!found.contains(&Skill::Java));
    }

    #[test]
    fn test_aliases_collapse_to_one_skill() {
        let found = extract_skills("Kubernetes (k8s), golang and Go");
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![Skill::Go, Skill::Kubernetes]
        );
    }

    #[test]
    fn test_no_skills_in_plain_prose() {
        assert!(extract_skills("We need a great team player").is_empty());
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_skill_names_sorted_by_identifier() {
        let names = extract_skill_names("Skills: Python, Docker, C++, AWS, PostgreSQL");
        assert_eq!(names, vec!["AWS", "C++", "Docker", "PostgreSQL", "Python"]);
    }

    #[test]
    fn test_canonical_to_display() {
        assert_eq!(canonical_to_display("node.js"), "Node.js");
        assert_eq!(canonical_to_display("rest api"), "REST API");
        assert_eq!(canonical_to_display("django"), "Django");
        assert_eq!(canonical_to_display("elixir"), "Elixir");
        assert_eq!(canonical_to_display(""), "");
    }
}
