//! The built-in questionnaire, in presentation order.

use crate::assessment::models::{
    AnswerOption, Question, QuestionCategory, QuestionId, QuestionKind, ScaleRange,
};

fn options(pairs: &[(&str, &str)]) -> Vec<AnswerOption> {
    pairs
        .iter()
        .map(|(value, label)| AnswerOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn choice_question(
    id: QuestionId,
    category: QuestionCategory,
    kind: QuestionKind,
    text: &str,
    description: Option<&str>,
    pairs: &[(&str, &str)],
) -> Question {
    Question {
        id,
        category,
        kind,
        text: text.to_string(),
        description: description.map(String::from),
        options: options(pairs),
        scale: None,
        required: true,
    }
}

pub fn builtin_questions() -> Vec<Question> {
    use QuestionCategory::*;
    use QuestionKind::*;

    vec![
        choice_question(
            QuestionId::ExperienceBackground,
            Background,
            SingleChoice,
            "Describe your professional background",
            Some("Select the option that best represents your current career stage."),
            &[
                ("student", "Student / New Graduate"),
                ("early_career", "Early Career (1-3 years)"),
                ("mid_career", "Mid-Career (4-10 years)"),
                ("senior", "Senior Professional (10+ years)"),
                ("career_changer", "Career Changer"),
            ],
        ),
        choice_question(
            QuestionId::EducationLevel,
            Background,
            SingleChoice,
            "What's your highest level of education?",
            None,
            &[
                ("high_school", "High School"),
                ("some_college", "Some College / Vocational"),
                ("bachelors", "Bachelor's Degree"),
                ("graduate", "Graduate Degree (Master's / PhD)"),
            ],
        ),
        choice_question(
            QuestionId::SkillStrengths,
            Skills,
            MultiChoice,
            "Which are your strongest skills?",
            Some("Select up to 2 skill areas."),
            &[
                ("technical", "Technical / Analytical"),
                ("communication", "Communication"),
                ("creative", "Creative / Design"),
                ("leadership", "Leadership"),
                ("research", "Research"),
            ],
        ),
        choice_question(
            QuestionId::FieldOfStudy,
            Skills,
            SingleChoice,
            "What was your primary field of study?",
            Some("Select the closest match to your major or area of focus."),
            &[
                ("computer_science", "Computer Science / IT"),
                ("engineering", "Engineering"),
                ("business", "Business / Management"),
                ("finance_accounting", "Finance / Accounting"),
                ("healthcare_medicine", "Healthcare / Medicine"),
                ("science", "Natural Sciences (Biology, Chemistry, Physics)"),
                ("arts_humanities", "Arts / Humanities"),
                ("social_sciences", "Social Sciences (Psychology, Sociology)"),
                ("education", "Education"),
                ("law", "Law / Legal Studies"),
                ("design_media", "Design / Media / Communications"),
                ("trades_vocational", "Trades / Vocational"),
                ("other", "Other / Not applicable"),
            ],
        ),
        choice_question(
            QuestionId::EnjoyedSkills,
            Interests,
            MultiChoice,
            "Which skills do you most enjoy using at work?",
            Some("Select up to 4 that you find most fulfilling."),
            &[
                ("problem_solving", "Problem Solving"),
                ("data_analysis", "Data Analysis"),
                ("writing", "Writing & Documentation"),
                ("presenting", "Presenting & Public Speaking"),
                ("design", "Design & Visual Work"),
                ("coding", "Coding & Technical Work"),
                ("leadership", "Leadership & Management"),
                ("negotiation", "Negotiation & Sales"),
                ("research", "Research & Investigation"),
                ("collaboration", "Team Collaboration"),
                ("teaching", "Teaching & Mentoring"),
                ("customer_service", "Customer Service"),
                ("hands_on_work", "Hands-on & Manual Work"),
                ("healthcare", "Healthcare & Patient Care"),
                ("styling", "Styling & Aesthetics"),
                ("legal_policy", "Legal & Policy Analysis"),
                ("scientific_lab", "Scientific & Lab Work"),
                ("event_planning", "Event Planning & Coordination"),
            ],
        ),
        choice_question(
            QuestionId::WorkEnergizes,
            Interests,
            MultiChoice,
            "What type of work energizes you the most?",
            Some("Select all that apply."),
            &[
                ("building", "Building things from scratch"),
                ("optimizing", "Optimizing existing processes"),
                ("helping", "Helping and mentoring others"),
                ("analyzing", "Analyzing data and patterns"),
                ("creating", "Creating visual or written content"),
                ("strategizing", "Developing strategies and plans"),
                ("connecting", "Connecting with clients/customers"),
                ("learning", "Learning new technologies/methods"),
            ],
        ),
        choice_question(
            QuestionId::ProblemType,
            Interests,
            SingleChoice,
            "What type of problems do you prefer solving?",
            None,
            &[
                ("technical", "Technical challenges (bugs, systems, architecture)"),
                ("people", "People challenges (team dynamics, communication)"),
                ("business", "Business challenges (growth, strategy, revenue)"),
                ("creative", "Creative challenges (design, user experience)"),
                ("analytical", "Analytical challenges (data, research, insights)"),
            ],
        ),
        choice_question(
            QuestionId::IndustryInterest,
            Preferences,
            SingleChoice,
            "Which industry area interests you most?",
            None,
            &[
                ("technology_engineering", "Technology & Engineering"),
                ("business_management", "Business, Management & Strategy"),
                ("finance_accounting", "Finance & Accounting"),
                ("healthcare_life_sciences", "Healthcare & Life Sciences"),
                ("education_training", "Education & Training"),
                ("creative_media_design", "Creative, Media & Design"),
                ("marketing_sales", "Marketing, Sales & Communication"),
                ("law_government", "Law, Government & Public Services"),
                ("science_research", "Science, Research & Data"),
                ("manufacturing_construction", "Manufacturing, Construction & Trades"),
                ("hospitality_service", "Hospitality, Travel & Service"),
                ("social_impact_nonprofit", "Social Impact, Non-Profit & Community"),
                ("beauty_fashion", "Beauty, Fashion & Lifestyle"),
                ("other", "Other (Sports, Entertainment, Agriculture, etc.)"),
            ],
        ),
        choice_question(
            QuestionId::WorkStyle,
            Preferences,
            SingleChoice,
            "What work style suits you best?",
            Some("Consider environment, team dynamics, and structure."),
            &[
                ("independent", "Independent / Flexible"),
                ("collaborative", "Collaborative / Team-oriented"),
                ("structured", "Structured / Corporate"),
                ("dynamic", "Dynamic / Startup"),
                ("mission_driven", "Mission-driven / Nonprofit"),
            ],
        ),
        choice_question(
            QuestionId::CareerPriority,
            Goals,
            SingleChoice,
            "What matters most in your career?",
            Some("Select your top priority."),
            &[
                ("compensation", "High Compensation"),
                ("balance", "Work-Life Balance"),
                ("growth", "Growth & Learning"),
                ("impact", "Making an Impact"),
                ("security", "Job Security"),
            ],
        ),
        Question {
            id: QuestionId::RiskTolerance,
            category: Goals,
            kind: NumericScale,
            text: "How comfortable are you with risk and uncertainty in your career?".to_string(),
            description: Some("0 means you want maximum stability, 10 means you love a gamble.".to_string()),
            options: vec![],
            scale: Some(ScaleRange {
                min: 0.0,
                max: 10.0,
                step: 1.0,
                min_label: Some("Stability first".to_string()),
                max_label: Some("Bring on the risk".to_string()),
            }),
            required: false,
        },
        Question {
            id: QuestionId::AdditionalContext,
            category: Goals,
            kind: FreeText,
            text: "Anything else we should know about your goals?".to_string(),
            description: Some("Optional. Shared with the AI advisor only.".to_string()),
            options: vec![],
            scale: None,
            required: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_are_unique() {
        let questions = builtin_questions();
        let ids: HashSet<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_choice_questions_have_options() {
        for q in builtin_questions() {
            match q.kind {
                QuestionKind::SingleChoice | QuestionKind::MultiChoice => {
                    assert!(!q.options.is_empty(), "{} has no options", q.id)
                }
                QuestionKind::NumericScale => assert!(q.scale.is_some(), "{} has no range", q.id),
                QuestionKind::FreeText => assert!(q.options.is_empty()),
            }
        }
    }

    #[test]
    fn test_option_label_lookup() {
        let questions = builtin_questions();
        let work_style = questions
            .iter()
            .find(|q| q.id == QuestionId::WorkStyle)
            .unwrap();
        assert_eq!(
            work_style.option_label("dynamic"),
            Some("Dynamic / Startup")
        );
        assert_eq!(work_style.option_label("nonexistent"), None);
    }
}
