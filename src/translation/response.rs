//! Best-effort parsing of model responses into code and explanation.
//!
//! The model is asked to follow the delimiter convention but is not trusted
//! to: a missing delimiter or fence degrades to a raw display, never to a
//! failed action.

use super::prompt::EXPLANATION_DELIMITER;

/// Shown when the response carried no delimiter-separated explanation.
pub const MISSING_EXPLANATION_FALLBACK: &str =
    "The model did not provide a separate explanation.";

/// Splits a raw response on the explanation delimiter.
///
/// Segments are returned exactly as they appear in the response: joining
/// them back with the delimiter reconstructs the original text. Returns
/// `None` for the second segment when the delimiter is absent.
pub fn split_on_delimiter(response: &str) -> (&str, Option<&str>) {
    match response.split_once(EXPLANATION_DELIMITER) {
        Some((translation, explanation)) => (translation, Some(explanation)),
        None => (response, None),
    }
}

/// Extracts the contents of the first fenced code block, excluding the
/// language-tag line.
///
/// Without any fence the text is returned as-is; an unterminated fence is
/// read to the end of the text.
pub fn extract_code_block(text: &str) -> &str {
    let Some(start) = text.find("```") else {
        return text;
    };

    let after = &text[start + 3..];
    let block = after.find("```").map_or(after, |end| &after[..end]);

    // First line of the block is the language tag (possibly empty)
    match block.split_once('\n') {
        Some((_tag, code)) => code.strip_suffix('\n').unwrap_or(code),
        None => block,
    }
}

/// A parsed translate-and-explain response, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// The translation segment, trimmed. May still contain a markdown fence;
    /// use [`TranslationOutcome::display_code`] for the bare code.
    pub translation: String,
    /// The explanation segment, trimmed, or the fixed fallback text.
    pub explanation: String,
}

impl TranslationOutcome {
    /// Parses a raw completion into translation and explanation.
    pub fn from_response(response: &str) -> Self {
        let (translation, explanation) = split_on_delimiter(response);

        Self {
            translation: translation.trim().to_string(),
            explanation: explanation
                .map_or(MISSING_EXPLANATION_FALLBACK, str::trim)
                .to_string(),
        }
    }

    /// The code to display: contents of the first fenced block if present,
    /// otherwise the whole translation segment.
    pub fn display_code(&self) -> &str {
        extract_code_block(&self.translation)
    }
}
