use anyhow::{Context, Result};
use phonenumber::country;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_PHONE_REGION: country::Id = country::Id::IN;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origins allowed by CORS (the dev frontend by default).
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    /// Region assumed for phone numbers written without a `+` prefix.
    pub phone_default_region: country::Id,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let phone_default_region = match lookup("PHONE_DEFAULT_REGION") {
            Some(raw) => raw
                .trim()
                .to_ascii_uppercase()
                .parse::<country::Id>()
                .ok()
                .with_context(|| {
                    format!("PHONE_DEFAULT_REGION must be an ISO 3166 region code, got '{raw}'")
                })?,
            None => DEFAULT_PHONE_REGION,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            allowed_origins,
            max_upload_bytes,
            phone_default_region,
        })
    }
}
