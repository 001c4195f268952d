mod client;
mod language;
mod prompt;
mod response;

pub use client::{CompletionClient, CompletionRequest, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use language::{Language, LanguageKind, print_languages};
pub use prompt::{EXPLANATION_DELIMITER, build_chat_prompt, build_translation_prompt};
pub use response::{
    MISSING_EXPLANATION_FALLBACK, TranslationOutcome, extract_code_block, split_on_delimiter,
};
