// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the cross-cutting pieces.

/// Appended to every system prompt. The API runs in JSON mode, which requires the
/// word "JSON" to appear in the conversation.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Joins a service-specific system prompt with the JSON-only instruction.
pub fn with_json_instruction(system: &str) -> String {
    format!("{system}\n\n{JSON_ONLY_INSTRUCTION}")
}

/// Truncates `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_json_instruction_mentions_json() {
        let system = with_json_instruction("You are a coach.");
        assert!(system.starts_with("You are a coach."));
        assert!(system.contains("JSON"));
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }
}
