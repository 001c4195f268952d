use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Editor, InquireError, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::input;
use crate::session::{CompletedTranslation, Session, Speaker};
use crate::translation::{
    CompletionClient, CompletionRequest, Language, TranslationOutcome, build_chat_prompt,
    build_translation_prompt,
};
use crate::ui::{Spinner, Style};

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key. May be absent at startup and supplied with `/set key`.
    pub api_key: Option<String>,
    /// The source language.
    pub source: Language,
    /// The target language.
    pub target: Language,
}

/// An interactive translate-then-discuss session.
///
/// Provides a REPL-style interface: code is translated with `/translate` or
/// `/code`, and plain input lines become follow-up questions about the most
/// recent translation.
pub struct ChatSession {
    config: SessionConfig,
    session: Session,
    client: Option<CompletionClient>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            client: None,
        }
    }

    /// The session state (translation result and chat transcript).
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self, initial_file: Option<&str>) -> Result<()> {
        ui::print_header();

        if let Some(file) = initial_file
            && let Err(e) = self.translate_file(file).await
        {
            ui::print_error(&e.to_string());
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask about the code, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(question) => {
                        if let Err(e) = self.ask(&question).await {
                            ui::print_error(&e.to_string());
                        }
                    }
                },
                Err(
                    InquireError::OperationCanceled | InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles a slash command. Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Reset => {
                self.session.reset();
                println!("{} Session cleared", Style::success("✓"));
                println!();
            }
            SlashCommand::Code => {
                if let Err(e) = self.translate_from_editor().await {
                    ui::print_error(&e.to_string());
                }
            }
            SlashCommand::Translate { file } => match file {
                None => ui::print_error("Usage: /translate <file>"),
                Some(file) => {
                    if let Err(e) = self.translate_file(&file).await {
                        ui::print_error(&e.to_string());
                    }
                }
            },
            SlashCommand::Set { key, value } => self.handle_set(&key, value.as_deref()),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        match key {
            "from" => self.set_source(value),
            "to" => self.set_target(value),
            "model" => self.set_model(value),
            "key" => self.set_api_key(value),
            "" => {
                println!("Usage: /set <key> <value>");
                println!("Keys: from, to, model, key");
            }
            _ => {
                ui::print_error(&format!("Unknown setting: {key}"));
                println!("Available: from, to, model, key");
            }
        }
    }

    fn set_source(&mut self, value: Option<&str>) {
        let Some(name) = value else {
            ui::print_error("Usage: /set from <language>");
            return;
        };

        match Language::parse(name) {
            Ok(language) => {
                self.config.source = language;
                println!(
                    "{} Source language set to {}\n",
                    Style::success("✓"),
                    Style::value(language)
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn set_target(&mut self, value: Option<&str>) {
        let Some(name) = value else {
            ui::print_error("Usage: /set to <language>");
            return;
        };

        match Language::parse(name) {
            Ok(language) => {
                self.config.target = language;
                println!(
                    "{} Target language set to {}\n",
                    Style::success("✓"),
                    Style::value(language)
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn set_model(&mut self, value: Option<&str>) {
        match value {
            None => ui::print_error("Usage: /set model <name>"),
            Some(model) => {
                self.config.model = model.to_string();
                println!(
                    "{} Model set to {}\n",
                    Style::success("✓"),
                    Style::value(model)
                );
            }
        }
    }

    fn set_api_key(&mut self, value: Option<&str>) {
        match value {
            None => ui::print_error("Usage: /set key <your-api-key>"),
            Some(key) => {
                self.config.api_key = Some(key.to_string());
                // Force the next action to pick up the new credential
                self.client = None;
                println!("{} API key updated\n", Style::success("✓"));
            }
        }
    }

    /// Returns the completion client, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when no API key is available yet.
    fn client(&mut self) -> Result<&CompletionClient> {
        if self.client.is_none() {
            let Some(api_key) = self.config.api_key.clone() else {
                anyhow::bail!(
                    "No API key found\n\n\
                     Set one with '/set key <your-api-key>', or export GROQ_API_KEY \
                     before starting lucid."
                );
            };
            self.client = Some(CompletionClient::new(self.config.endpoint.clone(), api_key));
        }

        self.client
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("completion client not initialized"))
    }

    async fn translate_file(&mut self, path: &str) -> Result<()> {
        let source_code = input::read_source(Some(path))?;
        self.translate_code(source_code).await
    }

    async fn translate_from_editor(&mut self) -> Result<()> {
        let source_code = match Editor::new("Source code:").prompt() {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        self.translate_code(source_code).await
    }

    async fn translate_code(&mut self, source_code: String) -> Result<()> {
        if source_code.trim().is_empty() {
            anyhow::bail!("No code to translate: the input is empty");
        }

        let (source, target) = (self.config.source, self.config.target);
        let prompt = build_translation_prompt(source, target, &source_code);
        let request = CompletionRequest::new(prompt, self.config.model.clone());

        let response = {
            let client = self.client()?;
            let spinner = Spinner::new("Analyzing your code...");
            let result = client.complete(&request).await;
            spinner.stop();
            result?
        };

        let outcome = TranslationOutcome::from_response(&response);
        ui::print_translation(&outcome);

        self.session.apply_translation(CompletedTranslation {
            source,
            target,
            original_code: source_code,
            translation: outcome.translation,
            explanation: outcome.explanation,
        });

        Ok(())
    }

    /// Answers a follow-up question about the current translation.
    ///
    /// Questions asked before any translation exists are rejected without
    /// touching the provider; a failed call leaves the transcript unchanged.
    pub async fn ask(&mut self, question: &str) -> Result<()> {
        let Some(context) = self.session.translation() else {
            ui::print_error(
                "Nothing to discuss yet. Translate some code first with /translate <file> or /code.",
            );
            return Ok(());
        };

        let prompt = build_chat_prompt(context, self.session.history(), question);
        let request = CompletionRequest::new(prompt, self.config.model.clone());

        let answer = {
            let client = self.client()?;
            let spinner = Spinner::new("Thinking...");
            let result = client.complete(&request).await;
            spinner.stop();
            result?
        };

        self.session.push_turn(Speaker::User, question);
        self.session.push_turn(Speaker::Assistant, answer.as_str());
        ui::print_answer(&answer);

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

    fn config_without_key() -> SessionConfig {
        SessionConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            source: Language::Python,
            target: Language::JavaScript,
        }
    }

    #[tokio::test]
    async fn test_question_without_translation_is_rejected_before_anything_else() {
        // No API key and no translation: the translation gate must win,
        // so this succeeds without ever needing a client.
        let mut chat = ChatSession::new(config_without_key());

        chat.ask("what does it do?").await.unwrap();

        assert!(chat.session().history().is_empty());
        assert!(!chat.session().has_translation());
    }

    #[tokio::test]
    async fn test_translate_without_key_is_blocked() {
        let mut chat = ChatSession::new(config_without_key());

        let result = chat.translate_code("print('hi')".to_string()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[tokio::test]
    async fn test_translate_empty_input_is_blocked() {
        let mut chat = ChatSession::new(config_without_key());

        let result = chat.translate_code("   \n".to_string()).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_set_key_resets_client() {
        let mut chat = ChatSession::new(config_without_key());
        assert!(chat.client().is_err());

        chat.set_api_key(Some("gsk_test"));
        assert!(chat.client().is_ok());

        // Updating the key drops the client so the next action rebuilds it
        chat.set_api_key(Some("gsk_other"));
        assert!(chat.client.is_none());
        assert!(chat.client().is_ok());
    }

    #[test]
    fn test_set_source_and_target() {
        let mut chat = ChatSession::new(config_without_key());

        chat.set_source(Some("html"));
        chat.set_target(Some("css"));
        assert_eq!(chat.config.source, Language::Html);
        assert_eq!(chat.config.target, Language::Css);

        // Unknown languages leave the configuration untouched
        chat.set_target(Some("cobol"));
        assert_eq!(chat.config.target, Language::Css);
    }
}
