//! Instruction template sent ahead of every user prompt

/// Fixed evaluator instruction. Identical for every model.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a drill instructor in a prompt-writing course. Your job is to analyze the prompts users write and give them direct, sharp feedback.

You evaluate every prompt by three criteria:
1. Clarity - is it clear what the user wants?
2. Specificity - is the request detailed enough?
3. Context - is there enough background to understand the task?

For every prompt you receive, reply in JSON only, with no additional text:
{
  "pros": ["strength 1", "strength 2"],
  "cons": ["point to improve 1", "point to improve 2"],
  "improvedPrompt": "an improved version of the original prompt"
}

Rules:
- Be direct and brief. No unnecessary compliments.
- If the prompt is bad, say so clearly.
- If the prompt is good, say what works and why.
- The improved prompt must be useful and ready to copy.
- Do not over-explain. Short points only.
- Return valid JSON only, without markdown or extra text."#;

/// Label separating the instruction from the subject matter
pub const USER_PROMPT_LABEL: &str = "Prompt to analyze:";

/// The labeled user segment
pub fn user_segment(prompt: &str) -> String {
    format!("{USER_PROMPT_LABEL}\n{prompt}")
}

/// Both segments, instruction first
pub fn build_segments(prompt: &str) -> Vec<String> {
    vec![SYSTEM_INSTRUCTION.to_string(), user_segment(prompt)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_order_and_label() {
        let segments = build_segments("summarize this article");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], SYSTEM_INSTRUCTION);
        assert_eq!(segments[1], "Prompt to analyze:\nsummarize this article");
    }

    #[test]
    fn test_user_prompt_is_literal() {
        let prompt = "```json\n{\"pros\": []}\n```  ";
        assert!(user_segment(prompt).ends_with(prompt));
    }

    #[test]
    fn test_instruction_names_criteria_and_shape() {
        for needle in ["Clarity", "Specificity", "Context", "\"pros\"", "\"cons\"", "\"improvedPrompt\"", "Be direct and brief"] {
            assert!(SYSTEM_INSTRUCTION.contains(needle), "missing {needle}");
        }
    }
}
