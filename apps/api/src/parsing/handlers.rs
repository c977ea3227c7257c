//! Axum route handler for resume uploads.

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::parsing::extract::{extract_text, DocumentKind};
use crate::parsing::resume::parse_resume;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

/// POST /parse-resume
///
/// Accepts a multipart upload (`file` field, `.pdf` / `.docx` / `.txt`), extracts its
/// text and returns contact details plus catalog skills.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_filename(&filename)?;
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some((filename, kind, bytes));
        break;
    }

    let (filename, kind, bytes) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    debug!(
        filename = %filename,
        kind = kind.as_str(),
        bytes = bytes.len(),
        "Extracting resume text"
    );

    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, kind))
        .await
        .context("resume text extraction task failed")??;

    let parsed = parse_resume(&text, &state.parse_options);

    info!(
        kind = kind.as_str(),
        chars = text.len(),
        skills = parsed.skills.len(),
        "Resume parsed"
    );

    Ok(Json(parsed))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
    }
}
