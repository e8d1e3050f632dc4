//! Turns the strongest score contributions of one career into short,
//! human-readable justifications.

use crate::assessment::models::{AnswerValue, QuestionId, ScaleTier, ScoreContribution};

/// A recommendation never carries more reasons than this.
pub const MAX_REASONS: usize = 4;
/// Appended when the templates yield fewer than two reasons.
pub const FALLBACK_REASON: &str = "Good match for your background and interests";
const MIN_REASONS: usize = 2;

/// Reasons for the top contributions, strongest first.
pub fn generate_reasons(contributions: &[ScoreContribution]) -> Vec<String> {
    let mut ranked: Vec<&ScoreContribution> = contributions.iter().collect();
    ranked.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));

    let mut reasons: Vec<String> = ranked
        .into_iter()
        .take(MAX_REASONS)
        .filter_map(|c| reason_for(c.question_id, &c.answer, c.tier))
        .collect();

    if reasons.len() < MIN_REASONS {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Sentence for one answered question, or `None` when the answer does not merit one.
pub fn reason_for(
    question: QuestionId,
    answer: &AnswerValue,
    tier: Option<ScaleTier>,
) -> Option<String> {
    match question {
        QuestionId::ExperienceBackground => {
            let label = match answer.as_text()? {
                "student" => "Your fresh perspective as a student/new grad",
                "early_career" => "Your early career experience",
                "mid_career" => "Your solid mid-career experience",
                "senior" => "Your extensive senior-level experience",
                "career_changer" => "Your career change journey brings fresh perspective",
                _ => return None,
            };
            Some(format!("{label} fits well"))
        }
        QuestionId::EducationLevel => match answer.as_text()? {
            "graduate" => Some("Your advanced education is highly valued".to_string()),
            "bachelors" => Some("Your bachelor's degree provides a strong foundation".to_string()),
            _ => None,
        },
        QuestionId::SkillStrengths => first_selected(
            answer,
            &[
                ("technical", "Your strong technical skills are highly valued"),
                ("communication", "Your communication skills are essential for success"),
                ("creative", "Your creativity aligns well with this role"),
                ("leadership", "Your leadership abilities are key for this path"),
                ("research", "Your research skills are a great asset"),
            ],
        ),
        QuestionId::FieldOfStudy => {
            let label = match answer.as_text()? {
                "computer_science" => "Your CS/IT background",
                "engineering" => "Your engineering background",
                "business" => "Your business education",
                "finance_accounting" => "Your finance background",
                "healthcare_medicine" => "Your healthcare education",
                "science" => "Your science background",
                "arts_humanities" => "Your arts background",
                "social_sciences" => "Your social sciences education",
                "education" => "Your education background",
                "law" => "Your legal studies",
                "design_media" => "Your design/media education",
                "trades_vocational" => "Your vocational training",
                _ => return None,
            };
            Some(format!("{label} is a great match"))
        }
        QuestionId::EnjoyedSkills => first_selected(
            answer,
            &[
                ("coding", "You enjoy coding and technical work"),
                ("leadership", "Your leadership interest is valued here"),
                ("design", "Your passion for design fits this path"),
                ("data_analysis", "You enjoy working with data and analysis"),
                ("problem_solving", "Your problem-solving passion is key"),
                ("presenting", "Your presentation skills will shine"),
                ("teaching", "Your passion for teaching and mentoring fits well"),
                ("customer_service", "Your customer service skills are valuable here"),
                ("hands_on_work", "Your hands-on skills are essential for this path"),
                ("healthcare", "Your healthcare and patient care skills align perfectly"),
                ("styling", "Your styling and aesthetics sense fits this industry"),
                ("legal_policy", "Your legal and policy analysis skills are key"),
                ("scientific_lab", "Your scientific and lab work experience is valued"),
                ("event_planning", "Your event planning skills are a great match"),
                ("writing", "Your writing skills are a great asset"),
                ("research", "Your research skills are highly valued"),
                ("collaboration", "You excel at team collaboration"),
                ("negotiation", "Your negotiation skills are a strong match"),
            ],
        ),
        QuestionId::WorkEnergizes => first_selected(
            answer,
            &[
                ("building", "You thrive when building new things"),
                ("strategizing", "You enjoy strategic thinking"),
                ("creating", "Creating content energizes you"),
                ("analyzing", "Analytical work motivates you"),
                ("helping", "Helping others drives your work"),
                ("connecting", "You thrive on connecting with people"),
                ("optimizing", "You enjoy optimizing and improving processes"),
                ("learning", "Your love of learning fits well"),
            ],
        ),
        QuestionId::ProblemType => {
            let value = answer.as_text()?;
            let label = match value {
                "technical" => "solving technical challenges",
                "people" => "navigating people-related challenges",
                "business" => "tackling business problems",
                "creative" => "addressing creative challenges",
                "analytical" => "diving into analytical problems",
                other => other,
            };
            Some(format!("You prefer {label}"))
        }
        QuestionId::IndustryInterest => {
            let value = answer.as_text()?;
            let label = match value {
                "other" => {
                    return Some("You're interested in exploring unique industry paths".to_string())
                }
                "technology_engineering" => "technology and engineering",
                "business_management" => "business and management",
                "finance_accounting" => "finance and accounting",
                "healthcare_life_sciences" => "healthcare and life sciences",
                "education_training" => "education and training",
                "creative_media_design" => "creative and media design",
                "marketing_sales" => "marketing and sales",
                "law_government" => "law and government",
                "science_research" => "science and research",
                "manufacturing_construction" => "manufacturing and construction",
                "hospitality_service" => "hospitality and service",
                "social_impact_nonprofit" => "social impact and nonprofit",
                "beauty_fashion" => "beauty, fashion and lifestyle",
                other => other,
            };
            Some(format!("Your interest in {label} fits perfectly"))
        }
        QuestionId::WorkStyle => {
            let value = answer.as_text()?;
            let label = match value {
                "independent" => "independent and flexible work",
                "collaborative" => "collaborative team environments",
                "structured" => "structured corporate settings",
                "dynamic" => "dynamic startup environments",
                "mission_driven" => "mission-driven organizations",
                other => other,
            };
            Some(format!("Your preference for {label} aligns well"))
        }
        QuestionId::CareerPriority => {
            let label = match answer.as_text()? {
                "compensation" => "high earning potential",
                "balance" => "work-life balance",
                "growth" => "continuous learning and growth",
                "impact" => "meaningful impact",
                "security" => "job stability and security",
                _ => return None,
            };
            Some(format!("This path offers {label}"))
        }
        QuestionId::RiskTolerance => match tier? {
            ScaleTier::High => Some("Your appetite for risk suits this fast-moving path".to_string()),
            ScaleTier::Low => Some("Your preference for stability is well served here".to_string()),
            ScaleTier::Medium => None,
        },
        QuestionId::AdditionalContext => None,
    }
}

/// First sentence, in priority order, whose key the answer selected. A single-choice
/// answer counts as a one-item selection.
fn first_selected(answer: &AnswerValue, priorities: &[(&str, &str)]) -> Option<String> {
    let selected: Vec<&str> = match answer {
        AnswerValue::Choices(values) => values.iter().map(String::as_str).collect(),
        AnswerValue::Text(value) => vec![value.as_str()],
        _ => return None,
    };

    priorities
        .iter()
        .find(|(key, _)| selected.contains(key))
        .map(|(_, sentence)| sentence.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contribution(question_id: QuestionId, answer: AnswerValue, value: f64) -> ScoreContribution {
        ScoreContribution {
            question_id,
            question_text: String::new(),
            answer,
            tier: None,
            contribution: value,
        }
    }

    #[test]
    fn test_reasons_follow_contribution_order() {
        let contributions = vec![
            contribution(QuestionId::WorkStyle, "dynamic".into(), 2.0),
            contribution(QuestionId::SkillStrengths, vec!["technical"].into(), 5.0),
            contribution(QuestionId::CareerPriority, "growth".into(), 4.0),
        ];
        let reasons = generate_reasons(&contributions);
        assert_eq!(
            reasons,
            vec![
                "Your strong technical skills are highly valued",
                "This path offers continuous learning and growth",
                "Your preference for dynamic startup environments aligns well",
            ]
        );
    }

    #[test]
    fn test_reasons_never_exceed_four() {
        let contributions = vec![
            contribution(QuestionId::SkillStrengths, vec!["technical"].into(), 5.0),
            contribution(QuestionId::FieldOfStudy, "computer_science".into(), 5.0),
            contribution(QuestionId::EnjoyedSkills, vec!["coding"].into(), 5.0),
            contribution(QuestionId::WorkEnergizes, vec!["building"].into(), 5.0),
            contribution(QuestionId::ProblemType, "technical".into(), 5.0),
            contribution(QuestionId::WorkStyle, "dynamic".into(), 4.0),
        ];
        let reasons = generate_reasons(&contributions);
        assert_eq!(reasons.len(), MAX_REASONS);
        assert!(!reasons.contains(&FALLBACK_REASON.to_string()));
    }

    #[test]
    fn test_fallback_appended_when_templates_yield_too_few() {
        let contributions = vec![contribution(
            QuestionId::EducationLevel,
            "bachelors".into(),
            3.0,
        )];
        let reasons = generate_reasons(&contributions);
        assert_eq!(
            reasons,
            vec![
                "Your bachelor's degree provides a strong foundation",
                FALLBACK_REASON,
            ]
        );
    }

    #[test]
    fn test_dropped_templates_leave_fallback_only() {
        let contributions = vec![contribution(
            QuestionId::EducationLevel,
            "some_college".into(),
            2.0,
        )];
        assert_eq!(generate_reasons(&contributions), vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_multi_choice_template_uses_priority_order() {
        let answer: AnswerValue = vec!["research", "communication"].into();
        assert_eq!(
            reason_for(QuestionId::SkillStrengths, &answer, None).as_deref(),
            Some("Your communication skills are essential for success")
        );
    }

    #[test]
    fn test_single_choice_answer_satisfies_multi_template() {
        assert_eq!(
            reason_for(QuestionId::SkillStrengths, &"technical".into(), None).as_deref(),
            Some("Your strong technical skills are highly valued")
        );
    }

    #[test]
    fn test_industry_other_has_dedicated_sentence() {
        assert_eq!(
            reason_for(QuestionId::IndustryInterest, &"other".into(), None).as_deref(),
            Some("You're interested in exploring unique industry paths")
        );
        assert_eq!(
            reason_for(QuestionId::IndustryInterest, &"beauty_fashion".into(), None).as_deref(),
            Some("Your interest in beauty, fashion and lifestyle fits perfectly")
        );
    }

    #[test]
    fn test_scale_template_skips_middle_tier() {
        let answer = AnswerValue::Number(5.0);
        assert!(reason_for(QuestionId::RiskTolerance, &answer, Some(ScaleTier::Medium)).is_none());
        assert!(reason_for(QuestionId::RiskTolerance, &answer, Some(ScaleTier::High)).is_some());
        assert!(reason_for(QuestionId::RiskTolerance, &answer, None).is_none());
    }

    #[test]
    fn test_mismatched_shape_yields_no_reason() {
        let answer = AnswerValue::Number(3.0);
        assert!(reason_for(QuestionId::WorkStyle, &answer, None).is_none());
        assert!(reason_for(QuestionId::EnjoyedSkills, &answer, None).is_none());
    }
}
