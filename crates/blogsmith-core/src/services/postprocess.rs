//! Cleanup of raw model output.
//!
//! The rules run in a fixed order and each one sees the output of the
//! previous one. Whitespace is flattened first, so every line break in the
//! result was put there by a later rule.

use std::sync::LazyLock;

use regex::Regex;

/// Closing instruction token some models echo back.
const INSTRUCTION_CLOSE: &str = "[/INST]";

/// Instruction sentence that leaks into generations.
const PROOFREAD_NOTE: &str = "Proofread for grammar and spelling errors.";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

// Whitespace is already collapsed, so at most one space touches a marker.
static BOLD_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\*\*(.*?)\*\* ?").expect("valid title pattern"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])[^\S\n]+").expect("valid sentence pattern"));

static EXCESS_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid break pattern"));

/// Apply every cleanup rule to raw model output.
pub fn clean_generation(raw: &str) -> String {
    let text = strip_leaked_instructions(raw);
    let text = collapse_whitespace(&text);
    let text = break_around_titles(&text);
    let text = break_after_sentences(&text);
    let text = collapse_breaks(&text);
    text.trim().to_string()
}

fn strip_leaked_instructions(text: &str) -> String {
    text.replace(INSTRUCTION_CLOSE, "").replace(PROOFREAD_NOTE, "")
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

fn break_around_titles(text: &str) -> String {
    BOLD_TITLE.replace_all(text, "\n\n**${1}**\n").into_owned()
}

fn break_after_sentences(text: &str) -> String {
    SENTENCE_END.replace_all(text, "${1}\n").into_owned()
}

fn collapse_breaks(text: &str) -> String {
    EXCESS_BREAKS.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_sentences() {
        assert_eq!(
            clean_generation("**My Title** This is one. This is two."),
            "**My Title**\nThis is one.\nThis is two."
        );
    }

    #[test]
    fn test_strips_leaked_instructions() {
        let raw = "[/INST] **Gardening** Water daily. Proofread for grammar and spelling errors.";
        assert_eq!(clean_generation(raw), "**Gardening**\nWater daily.");
    }

    #[test]
    fn test_model_paragraphs_are_rebuilt() {
        let raw = "**Title**\n\n\nIntro line one.\n  Intro line two!\n\n**Section**\n\nBody? Yes.";

        assert_eq!(
            clean_generation(raw),
            "**Title**\nIntro line one.\nIntro line two!\n\n**Section**\nBody?\nYes."
        );
    }

    #[test]
    fn test_subheading_after_plain_text() {
        assert_eq!(
            clean_generation("Some intro **Part One** Details here."),
            "Some intro\n\n**Part One**\nDetails here."
        );
    }

    #[test]
    fn test_only_leaked_text_is_empty() {
        assert_eq!(clean_generation(" [/INST] \n Proofread for grammar and spelling errors. "), "");
    }

    #[test]
    fn test_early_rules_are_idempotent() {
        let raw = "[/INST]  A  sentence.\n\nProofread for grammar and spelling errors. Another\tone.";

        let once = collapse_whitespace(&strip_leaked_instructions(raw));
        let twice = collapse_whitespace(&strip_leaked_instructions(&once));
        assert_eq!(once, twice);
        assert_eq!(once, "A sentence. Another one.");
    }

    #[test]
    fn test_late_rules_are_idempotent() {
        let text = "\n\n\n\nA.\n\n\nB.\n";

        let once = collapse_breaks(text).trim().to_string();
        let twice = collapse_breaks(&once).trim().to_string();
        assert_eq!(once, twice);
        assert_eq!(once, "A.\n\nB.");
    }

    #[test]
    fn test_single_pass_output() {
        let raw = "**Title** First. Second. **Sub** Third.";
        assert_eq!(
            clean_generation(raw),
            "**Title**\nFirst.\nSecond.\n\n**Sub**\nThird."
        );
    }
}
