//! Transient session state for one interactive use of the tool.
//!
//! Nothing here is persisted: the session is created on start, mutated only
//! by the handler of the current user action, and discarded on exit.

use crate::translation::Language;

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        })
    }
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub message: String,
}

impl ChatTurn {
    pub fn new(speaker: Speaker, message: impl Into<String>) -> Self {
        Self {
            speaker,
            message: message.into(),
        }
    }
}

/// A finished translate-and-explain action, kept as context for follow-up
/// questions.
#[derive(Debug, Clone)]
pub struct CompletedTranslation {
    pub source: Language,
    pub target: Language,
    pub original_code: String,
    pub translation: String,
    pub explanation: String,
}

/// All state held for one session.
#[derive(Debug, Default)]
pub struct Session {
    translation: Option<CompletedTranslation>,
    history: Vec<ChatTurn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent translation, if any action has completed yet.
    pub const fn translation(&self) -> Option<&CompletedTranslation> {
        self.translation.as_ref()
    }

    /// Whether follow-up chat is available.
    pub const fn has_translation(&self) -> bool {
        self.translation.is_some()
    }

    /// Stores a new translation result and starts a fresh conversation:
    /// the previous history refers to the previous code.
    pub fn apply_translation(&mut self, translation: CompletedTranslation) {
        self.translation = Some(translation);
        self.history.clear();
    }

    /// Appends a turn to the transcript. The transcript is append-only and
    /// reflects turn order.
    pub fn push_turn(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.history.push(ChatTurn::new(speaker, message));
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Clears everything, as if the session had just started.
    pub fn reset(&mut self) {
        self.translation = None;
        self.history.clear();
    }
}
