pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as match_handlers;
use crate::parsing::handlers as parse_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/parse-resume", post(parse_handlers::handle_parse_resume))
        // Skill matching
        .route("/match-resume", post(match_handlers::handle_match_resume))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::scoring::WeightedSkillScorer;

    const BOUNDARY: &str = "skillmatch-test-boundary";

    fn test_router(max_upload_bytes: usize) -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            allowed_origins: vec![],
            max_upload_bytes,
            phone_default_region: phonenumber::country::Id::IN,
        };
        build_router(AppState::new(config, Arc::new(WeightedSkillScorer)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(test_router(1024 * 1024), request).await
    }

    async fn send_to(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload_request(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_on_root_and_health() {
        for uri in ["/", "/health"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let (status, body) = send(request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "ok");
        }
    }

    #[tokio::test]
    async fn test_match_resume_weighted_score() {
        let request = json_request(
            "/match-resume",
            json!({
                "resume": {
                    "contact": {"name": null, "email": null, "phone": null},
                    "skills": ["Python", "SQL"],
                    "experience": [],
                    "education": []
                },
                "job_title": "Backend Engineer",
                "job_description": "Must have strong Python skills. Docker experience preferred."
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"match_score": 26, "matched_skills": ["Python"]}));
    }

    #[tokio::test]
    async fn test_match_resume_without_catalog_skills_in_job() {
        let request = json_request(
            "/match-resume",
            json!({
                "resume": {"contact": {}, "skills": ["Python", "Docker"]},
                "job_title": "Team Lead",
                "job_description": "We need a great team player"
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"match_score": 0, "matched_skills": []}));
    }

    #[tokio::test]
    async fn test_match_resume_rejects_incomplete_body() {
        let request = json_request("/match-resume", json!({"job_title": "Engineer"}));
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_parse_resume_text_upload() {
        let resume = b"Ada Lovelace\nada@example.com\nSkills: Rust, Kubernetes, PostgreSQL";
        let (status, body) = send(upload_request("file", "resume.txt", resume)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact"]["name"], "Ada Lovelace");
        assert_eq!(body["contact"]["email"], "ada@example.com");
        assert_eq!(body["contact"]["phone"], Value::Null);
        assert_eq!(body["skills"], json!(["Kubernetes", "PostgreSQL", "Rust"]));
        assert_eq!(body["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_unknown_extension() {
        let (status, body) = send(upload_request("file", "resume.exe", b"MZ")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Invalid file type");
    }

    #[tokio::test]
    async fn test_parse_resume_requires_file_field() {
        let (status, body) = send(upload_request("attachment", "resume.txt", b"Rust")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_resume_unreadable_pdf() {
        let (status, body) = send(upload_request("file", "resume.pdf", b"not a pdf")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_parse_resume_over_size_limit() {
        let router = test_router(64);
        let content = vec![b'a'; 4096];
        let (status, _) = send_to(router, upload_request("file", "resume.txt", &content)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
