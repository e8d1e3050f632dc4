//! Ranking: score and explain every career, then order by score.

use tracing::debug;

use crate::assessment::catalog::Catalog;
use crate::assessment::models::{AnswerSet, CareerPath, CareerRecommendation};
use crate::assessment::reasons::generate_reasons;
use crate::assessment::scoring::score_career;

/// Number of careers surfaced to users.
pub const TOP_N: usize = 3;

/// Every career in the catalog, best match first. Ties keep catalog order.
pub fn rank_all(catalog: &Catalog, answers: &AnswerSet) -> Vec<CareerRecommendation> {
    let mut recommendations: Vec<CareerRecommendation> = catalog
        .careers()
        .iter()
        .map(|career| recommend_career(catalog, career, answers))
        .collect();

    // sort_by is stable; scores are never NaN
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        answered = answers.len(),
        best = recommendations.first().map(|r| r.career.id.as_str()),
        "Ranked {} careers",
        recommendations.len()
    );

    recommendations
}

/// The `TOP_N` best matches.
pub fn recommend(catalog: &Catalog, answers: &AnswerSet) -> Vec<CareerRecommendation> {
    let mut ranked = rank_all(catalog, answers);
    ranked.truncate(TOP_N);
    ranked
}

fn recommend_career(
    catalog: &Catalog,
    career: &CareerPath,
    answers: &AnswerSet,
) -> CareerRecommendation {
    let scored = score_career(catalog, career, answers);
    CareerRecommendation {
        career: career.clone(),
        score: scored.score,
        percentage: to_percentage(scored.score),
        reasons: generate_reasons(&scored.contributions),
    }
}

pub fn to_percentage(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
