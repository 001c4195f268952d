//! The three fixed prompt templates and their selection rule.
//!
//! Non-chat templates ask the model to separate code and explanation with
//! [`EXPLANATION_DELIMITER`]; the response splitter relies on that convention.

use crate::session::{ChatTurn, CompletedTranslation};

use super::language::{Language, LanguageKind};

/// Literal marker the model is asked to place between code and explanation.
pub const EXPLANATION_DELIMITER: &str = "---EXPLANATION---";

pub const TRANSLATION_PROMPT_TEMPLATE: &str = "\
You are an expert programmer and code translator. Your task is to translate a \
code snippet from {source_language} to {target_language} and provide a clear \
explanation.

You must provide your response in two distinct parts separated by the literal \
delimiter `---EXPLANATION---`.

Part 1: The translated code. It should be clean, idiomatic for the target \
language, and enclosed in a markdown code block.
Part 2: A high-level explanation of what the code does. This should be a \
concise summary, not a line-by-line analysis.

Original code ({source_language}):
```
{source_code}
```

Translate this code to {target_language}.";

pub const WEBPAGE_PROMPT_TEMPLATE: &str = "\
You are an expert programmer and code-to-web converter. The user has given \
you {source_language} code, and they want to see it represented as a webpage \
in {target_language}.

Your task:
- If {target_language} is HTML, generate a webpage that visually represents \
what the original code does or outputs.
- If {target_language} is CSS, create styles that could represent or enhance \
the behavior or output of the original code.
- Keep it clean, semantic, and enclosed in a proper markdown code block.

Provide your response in two distinct parts separated by `---EXPLANATION---`.

Part 1: The {target_language} code.
Part 2: A short explanation of how this {target_language} version represents \
the original code.

Original code ({source_language}):
```
{source_code}
```";

pub const CHAT_PROMPT_TEMPLATE: &str = "\
You are an AI coding assistant. A user has provided a piece of code and its \
translation, and will ask follow-up questions. Answer any question related to \
the given code, its languages, or its functionality.

You must:
- Explain what the code does, including syntax, logic, and language-specific \
details.
- Answer questions about how the code works and why it is written that way.
- Provide improvements, optimizations, and best practices when relevant.
- Help debug errors, explain error messages, and suggest fixes.
- Keep explanations clear, concise, and beginner-friendly, with more depth \
when the user asks for it.

--- CONTEXT ---
Original code ({source_language}):
```
{original_code}
```

Translated code ({target_language}):
```
{translated_code}
```

--- CHAT HISTORY ---
{chat_history}

--- USER'S NEW QUESTION ---
{question}";

/// Builds the prompt for a translate-and-explain action.
///
/// Markup targets (HTML, CSS) get the webpage-representation template, all
/// other targets the generic translation template.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translation_prompt(source: Language, target: Language, source_code: &str) -> String {
    // {source_language} etc. are placeholders for string replacement, not format arguments
    let template = match target.kind() {
        LanguageKind::Markup => WEBPAGE_PROMPT_TEMPLATE,
        LanguageKind::Programming => TRANSLATION_PROMPT_TEMPLATE,
    };

    template
        .replace("{source_language}", source.name())
        .replace("{target_language}", target.name())
        .replace("{source_code}", source_code)
}

/// Builds the follow-up chat prompt from the completed translation, the
/// conversation so far, and the new question.
///
/// The history is embedded without a size cap, so prompts grow with long
/// conversations.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_chat_prompt(
    context: &CompletedTranslation,
    history: &[ChatTurn],
    question: &str,
) -> String {
    CHAT_PROMPT_TEMPLATE
        .replace("{source_language}", context.source.name())
        .replace("{target_language}", context.target.name())
        .replace("{original_code}", &context.original_code)
        .replace("{translated_code}", &context.translation)
        .replace("{chat_history}", &render_history(history))
        .replace("{question}", question)
}

fn render_history(history: &[ChatTurn]) -> String {
    if history.is_empty() {
        return "(no previous turns)".to_string();
    }

    history
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker, turn.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Speaker;

    fn context() -> CompletedTranslation {
        CompletedTranslation {
            source: Language::Python,
            target: Language::JavaScript,
            original_code: "print('hi')".to_string(),
            translation: "console.log('hi')".to_string(),
            explanation: "Prints hi.".to_string(),
        }
    }

    #[test]
    fn test_templates_have_placeholders() {
        for template in [TRANSLATION_PROMPT_TEMPLATE, WEBPAGE_PROMPT_TEMPLATE] {
            assert!(template.contains("{source_language}"));
            assert!(template.contains("{target_language}"));
            assert!(template.contains("{source_code}"));
            assert!(template.contains(EXPLANATION_DELIMITER));
        }
    }

    #[test]
    fn test_translation_prompt_contents() {
        let prompt =
            build_translation_prompt(Language::Python, Language::JavaScript, "print('hi')");
        assert!(prompt.contains("Python"));
        assert!(prompt.contains("JavaScript"));
        assert!(prompt.contains("print('hi')"));
        assert!(prompt.contains(EXPLANATION_DELIMITER));
        assert!(!prompt.contains("{source_code}"));
    }

    #[test]
    fn test_markup_target_selects_webpage_template() {
        for target in [Language::Html, Language::Css] {
            let prompt = build_translation_prompt(Language::Python, target, "print('hi')");
            assert!(prompt.contains("represented as a webpage"));
            assert!(!prompt.contains("code translator"));
        }
    }

    #[test]
    fn test_programming_target_selects_translation_template() {
        let prompt = build_translation_prompt(Language::Html, Language::Python, "<p>hi</p>");
        assert!(prompt.contains("code translator"));
        assert!(!prompt.contains("represented as a webpage"));
    }

    #[test]
    fn test_chat_prompt_contents() {
        let history = vec![
            ChatTurn::new(Speaker::User, "What does it do?"),
            ChatTurn::new(Speaker::Assistant, "It prints hi."),
        ];
        let prompt = build_chat_prompt(&context(), &history, "Can it be shorter?");

        assert!(prompt.contains("print('hi')"));
        assert!(prompt.contains("console.log('hi')"));
        assert!(prompt.contains("user: What does it do?"));
        assert!(prompt.contains("assistant: It prints hi."));
        assert!(prompt.contains("Can it be shorter?"));
    }

    #[test]
    fn test_chat_prompt_empty_history() {
        let prompt = build_chat_prompt(&context(), &[], "Why semicolons?");
        assert!(prompt.contains("(no previous turns)"));
        assert!(prompt.contains("Why semicolons?"));
    }
}
