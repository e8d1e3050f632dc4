// Prompts for interview question generation and answer evaluation.

use crate::interview::models::InterviewCategory;
use crate::llm_client::prompts::truncate_chars;

/// Job description and resume excerpts in evaluation prompts are cut to this many chars.
pub const CONTEXT_EXCERPT_CHARS: usize = 1000;

pub const GENERATE_QUESTIONS_SYSTEM_PROMPT: &str = "\
You are an expert interview coach and hiring manager with decades of experience across \
multiple industries. Your task is to generate highly relevant interview questions based \
on a job description and candidate's resume.

QUESTION CATEGORIES:
1. BEHAVIORAL - Past behavior predicts future performance
   - Use \"Tell me about a time when...\" format
   - Focus on STAR method-friendly scenarios
   - Examples: leadership challenges, conflict resolution, failure/learning moments, teamwork

2. TECHNICAL - Job-specific skills and knowledge
   - Based on required skills in job description
   - Test understanding of tools, methodologies, concepts

3. SITUATIONAL - Hypothetical future scenarios
   - Use \"How would you handle...\" format
   - Based on likely challenges in this role
   - Test problem-solving approach and judgment

4. CULTURAL - Values, work style, and team fit
   - Questions about work preferences, collaboration style, motivation

GUIDELINES:
- Make questions SPECIFIC to the job and candidate's background
- Reference actual skills, experiences, or requirements from the inputs
- Avoid generic questions that could apply to any job
- Balance difficulty - some foundational, some challenging
- Each question should assess distinct competencies

OUTPUT FORMAT:
Return a JSON object with a \"questions\" array containing objects with:
- id: unique identifier (uuid format)
- text: the full question text
- category: \"behavioral\", \"technical\", \"situational\" or \"cultural\"
- context: brief explanation of why this question is relevant (1 sentence)
- skillsAssessed: array of 1-3 skills this question evaluates";

pub const EVALUATE_ANSWER_SYSTEM_PROMPT: &str = "\
You are an expert interview coach providing constructive feedback on interview answers. \
Your feedback should be encouraging yet honest, helping candidates improve.

EVALUATION CRITERIA (25 points each):
1. STRUCTURE - clear organization, STAR method for behavioral questions, logical flow
2. RELEVANCE - directly addresses the question with specific, job-related examples
3. DEPTH - specific details, understanding of concepts, demonstrated expertise
4. IMPACT - measurable results, value to the employer, memorable

STAR METHOD ANALYSIS (for behavioral questions):
- Situation: Did they set the scene clearly?
- Task: Did they explain their specific responsibility?
- Action: Did they describe what THEY did (not the team)?
- Result: Did they share the outcome with specifics?

FEEDBACK GUIDELINES:
- Start with genuine positives
- Be specific about improvements and provide actionable suggestions
- Keep an encouraging tone throughout
- Sample answer should be realistic, not perfect";

/// Splits `count` questions evenly across categories; earlier categories take the remainder.
pub fn category_mix(count: usize) -> Vec<(InterviewCategory, usize)> {
    let n = InterviewCategory::ALL.len();
    InterviewCategory::ALL
        .into_iter()
        .enumerate()
        .map(|(i, category)| (category, count / n + usize::from(i < count % n)))
        .collect()
}

pub fn generate_questions_user_prompt(
    job_description: &str,
    resume_text: &str,
    count: usize,
) -> String {
    let requirements: Vec<String> = category_mix(count)
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(category, n)| format!("- {n} {} questions", category.as_str()))
        .collect();

    format!(
        "Generate {count} interview questions for the following:

JOB DESCRIPTION:
{job_description}

CANDIDATE RESUME:
{resume_text}

Requirements:
{}

Make questions specific to this job and candidate. Reference actual requirements and experiences.

Return valid JSON only.",
        requirements.join("\n")
    )
}

pub fn evaluate_answer_user_prompt(
    question: &str,
    question_category: &str,
    user_answer: &str,
    job_description: &str,
    resume_text: &str,
) -> String {
    let job = truncate_chars(job_description, CONTEXT_EXCERPT_CHARS);
    let resume = truncate_chars(resume_text, CONTEXT_EXCERPT_CHARS);

    format!(
        "Evaluate this interview answer:

QUESTION ({question_category}):
{question}

CANDIDATE'S ANSWER:
{user_answer}

JOB CONTEXT:
{job}...

CANDIDATE BACKGROUND:
{resume}...

Provide feedback in this JSON format:
{{
  \"score\": <0-100 total score>,
  \"strengths\": [\"strength 1\", \"strength 2\", ...],
  \"improvements\": [\"specific improvement 1\", \"specific improvement 2\", ...],
  \"sampleAnswer\": \"<a strong sample answer for comparison - 2-3 paragraphs>\",
  \"starAnalysis\": {{
    \"situation\": <true if clearly stated, false if missing/weak>,
    \"task\": <true if clearly stated, false if missing/weak>,
    \"action\": <true if clearly stated, false if missing/weak>,
    \"result\": <true if clearly stated, false if missing/weak>
  }}
}}

Note: starAnalysis is only required for behavioral questions. For technical/situational, \
you may omit it or set all to true if the answer was well-structured.

Return valid JSON only."
    )
}
