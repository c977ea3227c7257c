//! Weighted Job-Skill Extractor — importance of each skill a job posting mentions.
//!
//! Every occurrence of a skill is judged by the language around it: a 50-character
//! window on each side is searched for "required" cues (weight 1.5) and "preferred"
//! cues (weight 0.8); otherwise the occurrence weighs 1.0. A preferred cue wins over a
//! required one in the same window. A skill keeps the highest weight any of its
//! occurrences earned.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::matching::catalog::{catalog, Skill};
use crate::matching::normalize::normalize;

/// Characters of context taken on each side of an occurrence.
pub const CONTEXT_WINDOW: usize = 50;

pub const BASE_WEIGHT: f64 = 1.0;
pub const REQUIRED_WEIGHT: f64 = 1.5;
pub const PREFERRED_WEIGHT: f64 = 0.8;

static REQUIRED_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(must|required|mandatory|strong|proven|expert|need to|should have)\b")
        .expect("Invalid regex")
});
static PREFERRED_CUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(preferred|nice to have|good to have|plus)\b").expect("Invalid regex")
});

/// Skill → weight for every catalog skill mentioned in `text`, in catalog order.
/// Skills that are never mentioned are absent.
pub fn extract_weighted_skills(text: &str) -> BTreeMap<Skill, f64> {
    let normalized = normalize(text);
    let mut weights = BTreeMap::new();

    for entry in catalog().entries() {
        let best = entry
            .patterns
            .iter()
            .flat_map(|pattern| pattern.occurrences(&normalized))
            .map(|span| occurrence_weight(&normalized, span))
            .reduce(f64::max);

        if let Some(weight) = best {
            weights.insert(entry.skill, weight);
        }
    }

    weights
}

/// Weight of one occurrence `(start, end)` of a skill in normalized (ASCII) text.
///
/// Starts at the base weight, is raised to the required weight by a required cue
/// anywhere in the window, then capped at the preferred weight by a preferred cue.
/// A preferred cue therefore overrides a required one in the same window.
fn occurrence_weight(normalized: &str, (start, end): (usize, usize)) -> f64 {
    let window_start = start.saturating_sub(CONTEXT_WINDOW);
    let window_end = (end + CONTEXT_WINDOW).min(normalized.len());
    let window = &normalized[window_start..window_end];

    let mut weight = BASE_WEIGHT;
    if REQUIRED_CUES.is_match(window) {
        weight = weight.max(REQUIRED_WEIGHT);
    }
    if PREFERRED_CUES.is_match(window) {
        weight = weight.min(PREFERRED_WEIGHT);
    }
    weight
}
