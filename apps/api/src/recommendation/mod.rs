//! Recommendation backends behind a single trait.
//!
//! `RuleBasedRecommender` runs the deterministic assessment engine.
//! `LlmRecommender` asks the model for a ranked shortlist.
//! `FallbackRecommender` tries a primary backend and answers with the rule engine
//! whenever the primary fails.
//!
//! `AppState` holds an `Arc<dyn CareerRecommender>`, chosen at startup from config.

pub mod handlers;
pub mod llm;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::assessment::{self, AnswerSet, Catalog, CareerRecommendation};
use crate::errors::AppError;

pub use llm::LlmRecommender;

/// Which backend produced a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    Ai,
    Rules,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub recommendations: Vec<CareerRecommendation>,
    pub source: RecommendationSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces the top career matches for a set of answers.
///
/// Carried in `AppState` as `Arc<dyn CareerRecommender>`.
#[async_trait]
pub trait CareerRecommender: Send + Sync {
    async fn recommend(&self, answers: &AnswerSet) -> Result<Recommendations, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedRecommender
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic recommender over a catalog. Never fails.
pub struct RuleBasedRecommender {
    catalog: &'static Catalog,
}

impl RuleBasedRecommender {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    pub fn recommend_now(&self, answers: &AnswerSet) -> Recommendations {
        Recommendations {
            recommendations: assessment::recommend(self.catalog, answers),
            source: RecommendationSource::Rules,
        }
    }
}

#[async_trait]
impl CareerRecommender for RuleBasedRecommender {
    async fn recommend(&self, answers: &AnswerSet) -> Result<Recommendations, AppError> {
        Ok(self.recommend_now(answers))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct FallbackRecommender<P> {
    primary: P,
    fallback: RuleBasedRecommender,
}

impl<P: CareerRecommender> FallbackRecommender<P> {
    pub fn new(primary: P, fallback: RuleBasedRecommender) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P: CareerRecommender> CareerRecommender for FallbackRecommender<P> {
    async fn recommend(&self, answers: &AnswerSet) -> Result<Recommendations, AppError> {
        match self.primary.recommend(answers).await {
            Ok(recommendations) => Ok(recommendations),
            Err(e) => {
                warn!("Primary recommender failed, using rule engine: {e}");
                Ok(self.fallback.recommend_now(answers))
            }
        }
    }
}
