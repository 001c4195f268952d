use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

/// Starts an interactive session.
///
/// Unlike the one-shot command, a missing API key is not fatal here: the
/// session starts and the key can be supplied with `/set key`.
pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let config_file = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
            model: options.model,
            api_key: options.api_key,
        },
        &config_file,
    )?;

    let mut session = ChatSession::new(SessionConfig {
        endpoint: resolved.endpoint,
        model: resolved.model,
        api_key: resolved.api_key,
        source: resolved.source,
        target: resolved.target,
    });

    session.run(options.file.as_deref()).await
}
