//! LLM-backed recommender: asks the model for a shortlist and maps its reply onto
//! catalog careers.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::assessment::models::{CareerPath, WeightTable};
use crate::assessment::ranking::{to_percentage, TOP_N};
use crate::assessment::reasons::MAX_REASONS;
use crate::assessment::{AnswerSet, Catalog, CareerRecommendation};
use crate::errors::AppError;
use crate::llm_client::prompts::with_json_instruction;
use crate::llm_client::{LlmClient, LlmError, Sampling};
use crate::recommendation::prompts::{
    format_answers, recommend_system_prompt, recommend_user_prompt,
};
use crate::recommendation::{CareerRecommender, RecommendationSource, Recommendations};

const SAMPLING: Sampling = Sampling {
    temperature: 0.7,
    max_tokens: 1500,
};

const CUSTOM_CAREER_ICON: &str = "💼";

/// Shape the model is asked to return. Accepts camelCase and snake_case keys.
#[derive(Debug, Deserialize)]
pub struct LlmRecommendationList {
    #[serde(default)]
    pub recommendations: Vec<LlmRecommendation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmRecommendation {
    #[serde(alias = "career_id")]
    pub career_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default, alias = "example_jobs")]
    pub example_jobs: Vec<String>,
}

pub struct LlmRecommender {
    llm: LlmClient,
    catalog: &'static Catalog,
}

impl LlmRecommender {
    pub fn new(llm: LlmClient, catalog: &'static Catalog) -> Self {
        Self { llm, catalog }
    }
}

#[async_trait]
impl CareerRecommender for LlmRecommender {
    async fn recommend(&self, answers: &AnswerSet) -> Result<Recommendations, AppError> {
        let system = with_json_instruction(&recommend_system_prompt(self.catalog));
        let prompt = recommend_user_prompt(&format_answers(self.catalog, answers));

        let reply: LlmRecommendationList = self.llm.call_json(&prompt, &system, SAMPLING).await?;
        debug!("LLM suggested {} careers", reply.recommendations.len());

        let recommendations = map_recommendations(self.catalog, reply);
        if recommendations.is_empty() {
            return Err(AppError::Llm(LlmError::EmptyContent));
        }

        Ok(Recommendations {
            recommendations,
            source: RecommendationSource::Ai,
        })
    }
}

/// Maps the model's reply onto catalog careers, keeping at most `TOP_N` entries.
/// Unknown ids become custom careers with no weights.
pub fn map_recommendations(
    catalog: &Catalog,
    reply: LlmRecommendationList,
) -> Vec<CareerRecommendation> {
    reply
        .recommendations
        .into_iter()
        .filter(|rec| !rec.career_id.trim().is_empty())
        .take(TOP_N)
        .map(|rec| {
            let career = match catalog.career(&rec.career_id) {
                Some(known) => known.clone(),
                None => custom_career(&rec),
            };
            let percentage = if rec.percentage.is_finite() {
                rec.percentage.clamp(0.0, 100.0)
            } else {
                0.0
            };
            let score = percentage / 100.0;
            let mut reasons = rec.reasons;
            reasons.truncate(MAX_REASONS);

            CareerRecommendation {
                career,
                score,
                percentage: to_percentage(score),
                reasons,
            }
        })
        .collect()
}

fn custom_career(rec: &LlmRecommendation) -> CareerPath {
    let spaced = rec.career_id.replace('_', " ");
    CareerPath {
        id: rec.career_id.clone(),
        title: rec.title.clone().unwrap_or_else(|| title_case(&spaced)),
        description: rec
            .description
            .clone()
            .unwrap_or_else(|| format!("A career path in {spaced}")),
        icon: CUSTOM_CAREER_ICON.to_string(),
        weights: WeightTable::new(),
        suggested_skills: vec![],
        example_jobs: rec.example_jobs.clone(),
        resources: vec![],
    }
}

/// Upper-cases the first letter of every whitespace-separated word.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_reply;

    fn reply(json: &str) -> LlmRecommendationList {
        parse_json_reply(json).unwrap()
    }

    #[test]
    fn test_known_ids_reuse_catalog_career() {
        let catalog = Catalog::builtin();
        let mapped = map_recommendations(
            catalog,
            reply(
                r#"{"recommendations":[{"careerId":"technology_engineering","percentage":91,
                    "reasons":["a","b","c","d","e"]}]}"#,
            ),
        );
        assert_eq!(mapped.len(), 1);
        assert_eq!(
            &mapped[0].career,
            catalog.career("technology_engineering").unwrap()
        );
        assert_eq!(mapped[0].percentage, 91);
        assert!((mapped[0].score - 0.91).abs() < 1e-9);
        assert_eq!(mapped[0].reasons.len(), MAX_REASONS);
    }

    #[test]
    fn test_unknown_ids_become_custom_careers() {
        let mapped = map_recommendations(
            Catalog::builtin(),
            reply(
                r#"{"recommendations":[{"career_id":"sports_fitness","percentage":80,
                    "reasons":["You coach a team"],"example_jobs":["Coach"]}]}"#,
            ),
        );
        let career = &mapped[0].career;
        assert_eq!(career.id, "sports_fitness");
        assert_eq!(career.title, "Sports Fitness");
        assert_eq!(career.description, "A career path in sports fitness");
        assert_eq!(career.icon, CUSTOM_CAREER_ICON);
        assert!(career.weights.is_empty());
        assert_eq!(career.example_jobs, vec!["Coach"]);
    }

    #[test]
    fn test_custom_career_keeps_supplied_title() {
        let mapped = map_recommendations(
            Catalog::builtin(),
            reply(
                r#"{"recommendations":[{"careerId":"real_estate","title":"Real Estate & Property",
                    "description":"Buying and selling property","percentage":70,"reasons":[]}]}"#,
            ),
        );
        assert_eq!(mapped[0].career.title, "Real Estate & Property");
        assert_eq!(mapped[0].career.description, "Buying and selling property");
    }

    #[test]
    fn test_percentage_is_clamped() {
        let mapped = map_recommendations(
            Catalog::builtin(),
            reply(
                r#"{"recommendations":[
                    {"careerId":"law_government","percentage":140,"reasons":[]},
                    {"careerId":"science_research","percentage":-5,"reasons":[]}]}"#,
            ),
        );
        assert_eq!(mapped[0].percentage, 100);
        assert_eq!(mapped[0].score, 1.0);
        assert_eq!(mapped[1].percentage, 0);
        assert_eq!(mapped[1].score, 0.0);
    }

    #[test]
    fn test_at_most_three_are_kept_and_blank_ids_dropped() {
        let mapped = map_recommendations(
            Catalog::builtin(),
            reply(
                r#"{"recommendations":[
                    {"careerId":"","percentage":99},
                    {"careerId":"technology_engineering","percentage":90},
                    {"careerId":"science_research","percentage":85},
                    {"careerId":"finance_accounting","percentage":80},
                    {"careerId":"law_government","percentage":75}]}"#,
            ),
        );
        let ids: Vec<&str> = mapped.iter().map(|r| r.career.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["technology_engineering", "science_research", "finance_accounting"]
        );
    }

    #[test]
    fn test_missing_list_maps_to_nothing() {
        assert!(map_recommendations(Catalog::builtin(), reply("{}")).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("energy utilities"), "Energy Utilities");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case(""), "");
    }
}
