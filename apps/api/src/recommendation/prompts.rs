// Prompts for LLM-backed career recommendations.

use crate::assessment::models::{AnswerValue, QuestionKind};
use crate::assessment::{AnswerSet, Catalog};

pub const RECOMMEND_SYSTEM_PROMPT_HEADER: &str = "\
You are an expert career advisor AI. Analyze the user's assessment answers carefully \
and recommend the top 3 most suitable industry categories.

AVAILABLE INDUSTRIES (prefer these, but can recommend others if a better match exists):";

pub const RECOMMEND_SYSTEM_PROMPT_RULES: &str = "\
CUSTOM INDUSTRIES: If the user selects \"Other\" for their industry interest, you SHOULD \
recommend custom industries that match their profile. Examples:
- sports_fitness: Sports, Fitness & Recreation (Coach, Personal Trainer, Sports Manager)
- entertainment_arts: Entertainment & Performing Arts (Actor, Producer, Talent Agent)
- agriculture_environment: Agriculture, Food & Environment (Agronomist, Food Scientist)
- real_estate: Real Estate & Property (Real Estate Agent, Property Manager, Urban Planner)
- transportation_logistics: Transportation & Logistics (Supply Chain Manager, Fleet Manager)
- energy_utilities: Energy & Utilities (Energy Analyst, Sustainability Manager)

Use snake_case for custom industry IDs and provide full details (title, description, exampleJobs).

MATCHING RULES:
- Technical skill strength + enjoys coding -> technology_engineering or science_research
- Creative skill strength + enjoys design -> creative_media_design or beauty_fashion
- Communication skill strength + leadership -> business_management or education_training
- Research skill strength + enjoys data analysis -> science_research or finance_accounting
- Mission-driven work style + impact priority -> social_impact_nonprofit or healthcare_life_sciences
- Structured work style + security priority -> finance_accounting or law_government
- Technical skills + enjoys hands-on work -> manufacturing_construction
- Communication skills + dynamic style -> hospitality_service or marketing_sales

Respond with JSON containing a \"recommendations\" array with exactly 3 matches:
- \"careerId\": industry id in snake_case; use the predefined IDs when possible
- \"title\": display title for the industry
- \"description\": brief description of the industry and what it involves
- \"percentage\": realistic match 60-95 based on how well they fit
- \"reasons\": 3-4 specific reasons referencing their actual answers
- \"exampleJobs\": array of 4-6 example job titles in this industry

Be specific! Reference their skill strengths, enjoyed skills, work style, and career priorities.";

/// System prompt listing every catalog career the model may pick from.
pub fn recommend_system_prompt(catalog: &Catalog) -> String {
    let industries: Vec<String> = catalog
        .careers()
        .iter()
        .enumerate()
        .map(|(i, career)| {
            format!(
                "{}. {} - {}: {}",
                i + 1,
                career.id,
                career.title,
                career.example_jobs.join(", ")
            )
        })
        .collect();

    format!(
        "{RECOMMEND_SYSTEM_PROMPT_HEADER}\n{}\n\n{RECOMMEND_SYSTEM_PROMPT_RULES}",
        industries.join("\n")
    )
}

pub fn recommend_user_prompt(formatted_answers: &str) -> String {
    format!(
        "Analyze these assessment answers and recommend the top 3 careers that best match this person:

{formatted_answers}

KEY INDICATORS TO CONSIDER:
- Skill strengths (technical, communication, creative, leadership, research)
- Skills they ENJOY using (most important for job satisfaction)
- What type of work ENERGIZES them
- Preferred problem type and industry interest
- Work style preference (independent, collaborative, structured, dynamic, mission-driven)
- Career priority (compensation, balance, growth, impact, security)

Return valid JSON only with your recommendations."
    )
}

/// One `question: answer` line per answered catalog question, in catalog order.
/// Choice values are replaced by their option labels when known.
pub fn format_answers(catalog: &Catalog, answers: &AnswerSet) -> String {
    catalog
        .questions()
        .iter()
        .filter_map(|question| {
            let answer = answers.get(question.id)?;
            let label = |value: &str| question.option_label(value).unwrap_or(value).to_string();
            let text = match (question.kind, answer) {
                (QuestionKind::MultiChoice, AnswerValue::Choices(values)) => values
                    .iter()
                    .map(|v| label(v.as_str()))
                    .collect::<Vec<_>>()
                    .join(", "),
                (_, AnswerValue::Text(value)) => label(value.as_str()),
                (_, AnswerValue::Number(n)) => n.to_string(),
                (_, AnswerValue::Choices(values)) => values.join(", "),
                (_, AnswerValue::Unrecognized(value)) => value.to_string(),
            };
            Some(format!("{}: {}", question.text, text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
