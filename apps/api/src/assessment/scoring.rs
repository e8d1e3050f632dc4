//! Per-career scoring: how much of the weight a career could earn from the given
//! answers it actually earns.
//!
//! Algorithm, for every catalog question in order:
//! 1. skip if unanswered or if the career declares no weights for it
//! 2. single-choice → weight of the selected option; max = largest option weight
//! 3. multi-choice → sum of distinct selected option weights, capped at 2 × largest option
//!    weight; max = 2 × largest option weight
//! 4. numeric-scale → weight of the low/medium/high tier the answer falls into;
//!    max = largest tier weight
//! 5. free text → 0 / 0
//!
//! score = Σ raw / Σ max, or 0 when nothing could be earned.

use std::collections::BTreeSet;

use crate::assessment::catalog::Catalog;
use crate::assessment::models::{
    AnswerSet, AnswerValue, CareerPath, Question, QuestionKind, QuestionWeights, ScaleTier,
    ScoreContribution,
};

/// Upper bound of the low tier, as a fraction of the scale maximum.
const LOW_TIER_MAX: f64 = 0.33;
/// Lower bound of the high tier, as a fraction of the scale maximum.
const HIGH_TIER_MIN: f64 = 0.67;
/// Multi-choice answers can earn at most this many times the best single option.
const MULTI_CHOICE_CAP: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CareerScore {
    /// 0.0 – 1.0
    pub score: f64,
    /// Every question that earned a non-zero weight, in catalog order.
    pub contributions: Vec<ScoreContribution>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct QuestionScore {
    raw: f64,
    max: f64,
    tier: Option<ScaleTier>,
}

impl QuestionScore {
    const ZERO: QuestionScore = QuestionScore {
        raw: 0.0,
        max: 0.0,
        tier: None,
    };
}

pub fn score_career(catalog: &Catalog, career: &CareerPath, answers: &AnswerSet) -> CareerScore {
    let mut total = 0.0_f64;
    let mut total_max = 0.0_f64;
    let mut contributions = Vec::new();

    for question in catalog.questions() {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };
        let Some(weights) = career.weights.get(&question.id) else {
            continue;
        };

        let scored = score_question(question, weights, answer);

        if scored.raw > 0.0 {
            contributions.push(ScoreContribution {
                question_id: question.id,
                question_text: question.text.clone(),
                answer: answer.clone(),
                tier: scored.tier,
                contribution: scored.raw,
            });
        }

        total += scored.raw;
        total_max += scored.max;
    }

    let score = if total_max > 0.0 {
        (total / total_max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CareerScore {
        score,
        contributions,
    }
}

fn score_question(
    question: &Question,
    weights: &QuestionWeights,
    answer: &AnswerValue,
) -> QuestionScore {
    match (question.kind, weights) {
        (QuestionKind::SingleChoice, QuestionWeights::Options(table)) => {
            let raw = answer
                .as_text()
                .and_then(|value| table.get(value))
                .copied()
                .unwrap_or(0.0);
            QuestionScore {
                raw,
                max: weights.max_weight(),
                tier: None,
            }
        }
        (QuestionKind::MultiChoice, QuestionWeights::Options(table)) => {
            let cap = weights.max_weight() * MULTI_CHOICE_CAP;
            let sum: f64 = answer
                .as_choices()
                .map(|values| {
                    // an option is either selected or not; repeats earn nothing extra
                    values
                        .iter()
                        .map(String::as_str)
                        .collect::<BTreeSet<_>>()
                        .into_iter()
                        .filter_map(|value| table.get(value))
                        .sum()
                })
                .unwrap_or(0.0);
            QuestionScore {
                raw: sum.min(cap),
                max: cap,
                tier: None,
            }
        }
        (QuestionKind::NumericScale, QuestionWeights::Tiers(tier_weights)) => {
            let scale_max = question.scale.as_ref().map(|s| s.max).unwrap_or(0.0);
            let tier = answer
                .as_number()
                .map(|value| scale_tier(value, scale_max));
            let raw = tier.and_then(|t| tier_weights.get(t)).unwrap_or(0.0);
            QuestionScore {
                raw,
                max: weights.max_weight(),
                tier,
            }
        }
        // Free text is never weighted; a weight shape that does not fit the question
        // type is rejected by `Catalog::validate`.
        _ => QuestionScore::ZERO,
    }
}

/// Buckets a scale answer relative to the scale maximum.
pub fn scale_tier(value: f64, scale_max: f64) -> ScaleTier {
    let ratio = if scale_max > 0.0 { value / scale_max } else { 0.0 };
    if ratio <= LOW_TIER_MAX {
        ScaleTier::Low
    } else if ratio >= HIGH_TIER_MIN {
        ScaleTier::High
    } else {
        ScaleTier::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::fixtures;
    use crate::assessment::models::{QuestionId, TierWeights};

    fn skill_catalog() -> Catalog {
        Catalog::new(
            vec![fixtures::single_choice(
                QuestionId::SkillStrengths,
                &["technical", "creative", "research"],
            )],
            vec![
                fixtures::career(
                    "technology_engineering",
                    vec![(
                        QuestionId::SkillStrengths,
                        fixtures::options(&[("technical", 5.0), ("research", 2.0)]),
                    )],
                ),
                fixtures::career(
                    "creative_media_design",
                    vec![(
                        QuestionId::SkillStrengths,
                        fixtures::options(&[("technical", 1.0)]),
                    )],
                ),
            ],
        )
    }

    fn scale_catalog(weights: TierWeights) -> Catalog {
        Catalog::new(
            vec![fixtures::scale(QuestionId::RiskTolerance, 10.0)],
            vec![fixtures::career(
                "scaled",
                vec![(QuestionId::RiskTolerance, QuestionWeights::Tiers(weights))],
            )],
        )
    }

    fn multi_catalog() -> Catalog {
        Catalog::new(
            vec![fixtures::multi_choice(
                QuestionId::EnjoyedSkills,
                &["coding", "problem_solving", "data_analysis", "writing"],
            )],
            vec![fixtures::career(
                "multi",
                vec![(
                    QuestionId::EnjoyedSkills,
                    fixtures::options(&[
                        ("coding", 5.0),
                        ("problem_solving", 4.0),
                        ("data_analysis", 3.0),
                    ]),
                )],
            )],
        )
    }

    #[test]
    fn test_each_career_normalizes_against_its_own_max() {
        let catalog = skill_catalog();
        let answers = AnswerSet::new().with(QuestionId::SkillStrengths, "technical");

        for career in catalog.careers() {
            let result = score_career(&catalog, career, &answers);
            assert_eq!(result.score, 1.0, "{}", career.id);
        }
    }

    #[test]
    fn test_single_choice_undeclared_option_scores_zero_but_counts_max() {
        let catalog = skill_catalog();
        let answers = AnswerSet::new().with(QuestionId::SkillStrengths, "creative");
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 0.0);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_single_choice_partial_weight() {
        let catalog = skill_catalog();
        let answers = AnswerSet::new().with(QuestionId::SkillStrengths, "research");
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert!((result.score - 0.4).abs() < 1e-9, "score was {}", result.score);
        assert_eq!(result.contributions.len(), 1);
        assert_eq!(result.contributions[0].contribution, 2.0);
    }

    #[test]
    fn test_single_choice_is_monotonic_in_weight() {
        let catalog = skill_catalog();
        let career = &catalog.careers()[0];
        let lower = score_career(
            &catalog,
            career,
            &AnswerSet::new().with(QuestionId::SkillStrengths, "research"),
        );
        let higher = score_career(
            &catalog,
            career,
            &AnswerSet::new().with(QuestionId::SkillStrengths, "technical"),
        );
        assert!(higher.score >= lower.score);
    }

    #[test]
    fn test_wrong_answer_shape_scores_zero() {
        let catalog = skill_catalog();
        let answers = AnswerSet::new().with(QuestionId::SkillStrengths, vec!["technical"]);
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 0.0);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_multi_choice_is_capped_at_twice_the_best_option() {
        let catalog = multi_catalog();
        let answers = AnswerSet::new().with(
            QuestionId::EnjoyedSkills,
            vec!["coding", "problem_solving", "data_analysis", "writing"],
        );
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.contributions[0].contribution, 10.0);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_multi_choice_below_cap() {
        let catalog = multi_catalog();
        let answers = AnswerSet::new().with(QuestionId::EnjoyedSkills, vec!["data_analysis", "writing"]);
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.contributions[0].contribution, 3.0);
        assert!((result.score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_multi_choice_repeated_option_counts_once() {
        let catalog = multi_catalog();
        let career = &catalog.careers()[0];
        let once = score_career(
            &catalog,
            career,
            &AnswerSet::new().with(QuestionId::EnjoyedSkills, vec!["coding"]),
        );
        let twice = score_career(
            &catalog,
            career,
            &AnswerSet::new().with(QuestionId::EnjoyedSkills, vec!["coding", "coding"]),
        );
        assert_eq!(once, twice);
        assert!(twice.score < 1.0);
    }

    #[test]
    fn test_scale_answer_in_high_tier_earns_full_score() {
        let catalog = scale_catalog(TierWeights {
            low: Some(1.0),
            medium: Some(3.0),
            high: Some(5.0),
        });
        let answers = AnswerSet::new().with(QuestionId::RiskTolerance, 7.0);
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.contributions[0].tier, Some(ScaleTier::High));
        assert_eq!(result.contributions[0].contribution, 5.0);
    }

    #[test]
    fn test_scale_undeclared_tier_scores_zero() {
        let catalog = scale_catalog(TierWeights {
            low: None,
            medium: None,
            high: Some(5.0),
        });
        let answers = AnswerSet::new().with(QuestionId::RiskTolerance, 2.0);
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 0.0);
        assert!(result.contributions.is_empty());
    }

    #[test]
    fn test_scale_tier_boundaries() {
        assert_eq!(scale_tier(0.0, 10.0), ScaleTier::Low);
        assert_eq!(scale_tier(3.0, 10.0), ScaleTier::Low);
        assert_eq!(scale_tier(3.4, 10.0), ScaleTier::Medium);
        assert_eq!(scale_tier(6.6, 10.0), ScaleTier::Medium);
        assert_eq!(scale_tier(7.0, 10.0), ScaleTier::High);
        assert_eq!(scale_tier(10.0, 10.0), ScaleTier::High);
        assert_eq!(scale_tier(5.0, 0.0), ScaleTier::Low);
    }

    #[test]
    fn test_free_text_is_not_scored() {
        let catalog = Catalog::new(
            vec![fixtures::free_text(QuestionId::AdditionalContext)],
            vec![fixtures::career(
                "texty",
                vec![(
                    QuestionId::AdditionalContext,
                    fixtures::options(&[("anything", 5.0)]),
                )],
            )],
        );
        let answers = AnswerSet::new().with(QuestionId::AdditionalContext, "anything");
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_career_without_weights_scores_zero() {
        let catalog = Catalog::new(
            vec![fixtures::single_choice(QuestionId::SkillStrengths, &["technical"])],
            vec![fixtures::career("blank", vec![])],
        );
        let answers = AnswerSet::new().with(QuestionId::SkillStrengths, "technical");
        let result = score_career(&catalog, &catalog.careers()[0], &answers);
        assert_eq!(result.score, 0.0);
        assert!(!result.score.is_nan());
    }

    #[test]
    fn test_builtin_scores_stay_in_unit_range() {
        let catalog = Catalog::builtin();
        let answers = fixtures::technical_profile();
        for career in catalog.careers() {
            let result = score_career(catalog, career, &answers);
            assert!((0.0..=1.0).contains(&result.score), "{}", career.id);
        }
    }

    #[test]
    fn test_scoring_does_not_mutate_answers() {
        let catalog = Catalog::builtin();
        let answers = fixtures::technical_profile();
        let before = answers.clone();
        let _ = score_career(catalog, &catalog.careers()[0], &answers);
        assert_eq!(answers, before);
    }
}
