//! Prompt templates for the text completion operations
//!
//! Each operation embeds the caller-supplied text verbatim into a fixed
//! template. The upstream service treats the result as natural language;
//! a caller can therefore steer the instruction with crafted input. That
//! is an accepted risk of the prompt-template approach, not something the
//! templates try to defend against.

use std::fmt;
use std::str::FromStr;

/// Fixed set of translation target languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    Spanish,
    French,
    German,
    Japanese,
    Italian,
}

impl TargetLanguage {
    /// All supported target languages, in menu order
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Spanish,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Japanese,
        TargetLanguage::Italian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Japanese => "Japanese",
            TargetLanguage::Italian => "Italian",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetLanguage::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported target language: {s}"))
    }
}

/// Instruction for answering a free-form question
pub fn answer_instruction(query: &str) -> String {
    format!("Please provide a clear and well-explained answer to the following question: {query}")
}

/// Instruction for translating text into a target language
pub fn translate_instruction(text: &str, language: TargetLanguage) -> String {
    format!("Translate the following text to {language}. Only provide the translated text: '{text}'")
}

/// Instruction for generating a script from a task description
pub fn code_instruction(task: &str) -> String {
    format!(
        "Generate a complete, well-commented Python script for the following task. \
         Do not include any explanations outside of the code comments. Task: {task}"
    )
}

/// Instruction for summarizing text
pub fn summarize_instruction(text: &str) -> String {
    format!("Please provide a short and simple summary of the following:\n\n{text}")
}

/// Remove code-fence markers from a generated code response
///
/// Removes every occurrence of the fenced-block markers, longest marker
/// first so the language-tagged opener is not left half-stripped.
pub fn strip_code_fences(response: &str) -> String {
    response
        .replace("```python", "")
        .replace("```", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_answer_instruction_embeds_query() {
        let instruction = answer_instruction("why is the sky blue?");
        assert!(instruction.ends_with("why is the sky blue?"));
        assert!(instruction.starts_with("Please provide a clear"));
    }

    #[test]
    fn test_translate_instruction_names_language() {
        let instruction = translate_instruction("good morning", TargetLanguage::Japanese);
        assert!(instruction.contains("to Japanese."));
        assert!(instruction.contains("'good morning'"));
    }

    #[test]
    fn test_code_instruction_embeds_task() {
        let instruction = code_instruction("sort a list of numbers");
        assert!(instruction.contains("Task: sort a list of numbers"));
    }

    #[test]
    fn test_summarize_instruction_separates_text() {
        let instruction = summarize_instruction("a long article");
        assert!(instruction.ends_with("\n\na long article"));
    }

    #[test]
    fn test_strip_code_fences_removes_tagged_fence() {
        let response = "```python\nprint('hi')\n```";
        assert_eq!(strip_code_fences(response), "print('hi')");
    }

    #[test]
    fn test_strip_code_fences_removes_bare_fence() {
        let response = "```\nlet x = 1;\n```\n";
        assert_eq!(strip_code_fences(response), "let x = 1;");
    }

    #[test]
    fn test_strip_code_fences_leaves_plain_text_untouched() {
        assert_eq!(strip_code_fences("print('hi')"), "print('hi')");
    }

    #[test]
    fn test_target_language_parse() {
        assert_eq!(
            "spanish".parse::<TargetLanguage>().unwrap(),
            TargetLanguage::Spanish
        );
        assert!("Klingon".parse::<TargetLanguage>().is_err());
    }

    proptest! {
        #[test]
        fn prop_stripped_output_never_contains_fence_markers(response in ".{0,200}") {
            let stripped = strip_code_fences(&response);
            prop_assert!(!stripped.contains("```"));
            prop_assert!(!stripped.contains("```python"));
        }
    }
}
