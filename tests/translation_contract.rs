//! Contract tests for the prompt/response pipeline.
//!
//! These pin down the display behavior the rest of the tool relies on:
//! delimiter splitting, fence extraction, template selection, and the
//! chat-only-after-translation rule.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lucid_cli::chat::{ChatSession, SessionConfig};
use lucid_cli::session::{CompletedTranslation, Session, Speaker};
use lucid_cli::translation::{
    EXPLANATION_DELIMITER, Language, MISSING_EXPLANATION_FALLBACK, TranslationOutcome,
    build_chat_prompt, build_translation_prompt, split_on_delimiter,
};

#[test]
fn test_split_segments_reconstruct_the_response() {
    let responses = [
        "code\n---EXPLANATION---\nwhy",
        "---EXPLANATION---",
        "```js\nx\n```\n---EXPLANATION---\ntrailing text\nwith lines",
    ];

    for response in responses {
        let (translation, explanation) = split_on_delimiter(response);
        let explanation = explanation.expect("delimiter should be found");
        assert_eq!(
            format!("{translation}{EXPLANATION_DELIMITER}{explanation}"),
            response
        );
    }
}

#[test]
fn test_split_without_delimiter_uses_fallback() {
    let response = "console.log('hi')";
    let outcome = TranslationOutcome::from_response(response);

    assert_eq!(outcome.translation, response);
    assert_eq!(outcome.explanation, MISSING_EXPLANATION_FALLBACK);
}

#[test]
fn test_displayed_code_is_the_first_fenced_block_without_tag() {
    let outcome = TranslationOutcome::from_response(
        "Some preamble\n```python\nprint('hi')\n```\nand a second block:\n```\nignored\n```",
    );
    assert_eq!(outcome.display_code(), "print('hi')");
}

#[test]
fn test_stubbed_provider_response_yields_code_and_explanation() {
    // The canonical end-to-end pair for a Python -> JavaScript run
    let stub = "```js\nconsole.log('hi')\n```\n---EXPLANATION---\nPrints hi.";
    let outcome = TranslationOutcome::from_response(stub);

    assert_eq!(outcome.display_code(), "console.log('hi')");
    assert_eq!(outcome.explanation, "Prints hi.");
}

#[test]
fn test_html_target_always_selects_webpage_template() {
    for source in Language::ALL {
        let prompt = build_translation_prompt(*source, Language::Html, "print('hi')");
        assert!(
            prompt.contains("represented as a webpage"),
            "HTML target must use the webpage template (source: {source})"
        );
        assert!(!prompt.contains("code translator"));
    }
}

#[test]
fn test_programming_target_selects_generic_template() {
    let prompt = build_translation_prompt(Language::Python, Language::JavaScript, "print('hi')");
    assert!(prompt.contains("code translator"));
    assert!(!prompt.contains("represented as a webpage"));
}

#[test]
fn test_chat_prompt_carries_context_and_history() {
    let context = CompletedTranslation {
        source: Language::Python,
        target: Language::JavaScript,
        original_code: "print('hi')".to_string(),
        translation: "console.log('hi')".to_string(),
        explanation: "Prints hi.".to_string(),
    };

    let mut session = Session::new();
    session.apply_translation(context.clone());
    session.push_turn(Speaker::User, "What does it do?");
    session.push_turn(Speaker::Assistant, "It prints hi.");

    let prompt = build_chat_prompt(&context, session.history(), "Can it be shorter?");

    assert!(prompt.contains("print('hi')"));
    assert!(prompt.contains("console.log('hi')"));
    assert!(prompt.contains("user: What does it do?"));
    assert!(prompt.contains("assistant: It prints hi."));
    assert!(prompt.contains("Can it be shorter?"));
}

#[tokio::test]
async fn test_chat_question_without_translation_is_rejected_locally() {
    // No API key is configured: if the gate ever consulted the provider (or
    // the credential) this would error instead of quietly refusing.
    let mut chat = ChatSession::new(SessionConfig {
        endpoint: "http://localhost:9".to_string(),
        model: "test-model".to_string(),
        api_key: None,
        source: Language::Python,
        target: Language::JavaScript,
    });

    chat.ask("what does this do?").await.unwrap();

    assert!(!chat.session().has_translation());
    assert!(chat.session().history().is_empty());
}
