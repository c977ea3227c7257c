//! Skill Canonicalizer — maps a skill string a candidate declared onto the catalog.

use std::fmt;

use crate::matching::catalog::{catalog, Skill};
use crate::matching::normalize::normalize;

/// Result of canonicalizing a free-form skill string.
///
/// `Unknown` carries the normalized string. It never equals a catalog identifier,
/// so it can never match a job skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Canonical {
    Known(Skill),
    Unknown(String),
}

impl Canonical {
    pub fn as_str(&self) -> &str {
        match self {
            Canonical::Known(skill) => skill.id(),
            Canonical::Unknown(text) => text,
        }
    }

    pub fn skill(&self) -> Option<Skill> {
        match self {
            Canonical::Known(skill) => Some(*skill),
            Canonical::Unknown(_) => None,
        }
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution order: exact identifier, then alias (first catalog-order owner), then the
/// same two checks again after rewriting `.js` as ` js`.
pub fn canonicalize(raw: &str) -> Canonical {
    let normalized = normalize(raw);
    if let Some(skill) = lookup(&normalized) {
        return Canonical::Known(skill);
    }

    let repaired = normalize(&normalized.replace(".js", " js"));
    match lookup(&repaired) {
        Some(skill) => Canonical::Known(skill),
        None => Canonical::Unknown(repaired),
    }
}

fn lookup(normalized: &str) -> Option<Skill> {
    let catalog = catalog();
    catalog
        .skill_for_identifier(normalized)
        .or_else(|| catalog.skill_for_alias(normalized))
}
