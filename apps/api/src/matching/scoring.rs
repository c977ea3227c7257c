//! Match Scoring — pluggable scorer that measures declared resume skills against a job.
//!
//! Default: `WeightedSkillScorer` (catalog-based, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::canonical::canonicalize;
use crate::matching::catalog::{display_name_of, Skill};
use crate::matching::weighting::extract_weighted_skills;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Final score plus the matched skills' display names, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            score: 0,
            matched: vec![],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the handler.
///
/// Scoring is total: every input produces a result.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_skills: &[String], job_title: &str, job_description: &str)
        -> MatchResult;

    /// Short backend label, logged with each match.
    fn backend(&self) -> &'static str;
}

/// Catalog-based weighted scorer.
pub struct WeightedSkillScorer;

impl MatchScorer for WeightedSkillScorer {
    fn score(
        &self,
        resume_skills: &[String],
        job_title: &str,
        job_description: &str,
    ) -> MatchResult {
        score(resume_skills, job_title, job_description)
    }

    fn backend(&self) -> &'static str {
        "weighted-skill"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// score = round_half_even(Σ weight of matched job skills / Σ weight of all job skills × 100)
///
/// A job that mentions no catalog skill cannot be scored and yields 0.
pub fn score<S: AsRef<str>>(
    resume_skills: &[S],
    job_title: &str,
    job_description: &str,
) -> MatchResult {
    let job_weights = extract_weighted_skills(&format!("{job_title}\n{job_description}"));
    if job_weights.is_empty() {
        return MatchResult::empty();
    }

    let resume: HashSet<Skill> = resume_skills
        .iter()
        .filter_map(|raw| canonicalize(raw.as_ref()).skill())
        .collect();

    let matched: Vec<(Skill, f64)> = job_weights
        .iter()
        .filter(|(skill, _)| resume.contains(skill))
        .map(|(&skill, &weight)| (skill, weight))
        .collect();

    let matched_weight: f64 = matched.iter().map(|(_, weight)| weight).sum();
    let total_weight: f64 = job_weights.values().sum();

    // Halves round to even: 12.5 → 12, 13.5 → 14.
    let score = ((matched_weight / total_weight) * 100.0)
        .round_ties_even()
        .clamp(0.0, 100.0) as u32;

    MatchResult {
        score,
        matched: matched
            .into_iter()
            .map(|(skill, _)| display_name_of(skill).to_string())
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
