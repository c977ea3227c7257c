//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::resume::ParsedResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume: ParsedResume,
    pub job_title: String,
    pub job_description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /match-resume
///
/// Scores the resume's declared skills against the job title and description.
/// Never fails once the body deserializes: a job with no recognizable skills scores 0.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let result = state.match_scorer.score(
        &request.resume.skills,
        &request.job_title,
        &request.job_description,
    );

    info!(
        backend = state.match_scorer.backend(),
        score = result.score,
        matched = result.matched.len(),
        declared = request.resume.skills.len(),
        "Resume matched against job"
    );

    Json(MatchResponse {
        match_score: result.score,
        matched_skills: result.matched,
    })
}
