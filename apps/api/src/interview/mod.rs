// Interview practice: tailored question generation, answer feedback, resume parsing
// and static study material. Question generation and evaluation need the LLM;
// everything else works without it.

pub mod evaluator;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod resources;
pub mod resume;
