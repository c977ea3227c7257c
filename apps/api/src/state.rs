use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::MatchScorer;
use crate::parsing::resume::ParseOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: WeightedSkillScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Resume parsing knobs derived from `config`.
    pub parse_options: ParseOptions,
}

impl AppState {
    pub fn new(config: Config, match_scorer: Arc<dyn MatchScorer>) -> Self {
        let parse_options = ParseOptions {
            default_region: config.phone_default_region,
        };
        Self {
            config,
            match_scorer,
            parse_options,
        }
    }
}
