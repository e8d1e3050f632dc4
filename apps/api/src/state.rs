use std::sync::Arc;

use crate::assessment::Catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::rate_limit::RateLimiter;
use crate::recommendation::CareerRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    /// `None` when no API key is configured; LLM-only routes then answer 503.
    pub llm: Option<LlmClient>,
    /// Pluggable recommender. LLM with rule-engine fallback when a key is set,
    /// otherwise the rule engine alone.
    pub recommender: Arc<dyn CareerRecommender>,
    pub rate_limiter: Arc<RateLimiter>,
    pub config: Config,
}

impl AppState {
    pub fn llm(&self) -> Result<&LlmClient, AppError> {
        self.llm.as_ref().ok_or(AppError::LlmUnavailable)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::rate_limit::SystemClock;
    use crate::recommendation::RuleBasedRecommender;

    /// Rule-engine-only state with default config.
    pub fn rules_only_state() -> AppState {
        let catalog = Catalog::builtin();
        let config = Config::from_lookup(|_| None).unwrap();
        AppState {
            catalog,
            llm: None,
            recommender: Arc::new(RuleBasedRecommender::new(catalog)),
            rate_limiter: Arc::new(RateLimiter::new(Arc::new(SystemClock))),
            config,
        }
    }
}
