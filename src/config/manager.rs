use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MODEL, Language};

/// Environment variable consulted for the API key when the config file does
/// not name another one.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Default settings in the `[lucid]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LucidConfig {
    /// Default source language name.
    pub from: Option<String>,
    /// Default target language name.
    pub to: Option<String>,
    /// Default model name.
    pub model: Option<String>,
}

/// Settings in the `[api]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// OpenAI-compatible endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ApiConfig {
    /// Gets the API key, preferring the environment over the config file.
    pub fn resolve_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lucid/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lucid: LucidConfig,
    /// API endpoint and credential settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override.
    pub from: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key, if one could be found anywhere.
    pub api_key: Option<String>,
    /// The source language.
    pub source: Language,
    /// The target language.
    pub target: Language,
}

impl ResolvedConfig {
    /// Returns the API key, or the error shown when an action that needs one
    /// is triggered without it.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "No API key found\n\n\
                 Provide one via:\n  \
                 - CLI option: lucid --api-key <key>\n  \
                 - Environment: export {API_KEY_ENV}=\"your-api-key\"\n  \
                 - Config file: api_key in ~/.config/lucid/config.toml"
            )
        })
    }
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values; model and endpoint
/// fall back to built-in defaults. The API key is resolved here but only
/// checked when an action actually needs it.
///
/// # Errors
///
/// Returns an error if a language is missing from both CLI and config file,
/// or if a language name is not supported.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let from = options
        .from
        .as_ref()
        .or(config_file.lucid.from.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'from' (source language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: lucid --from <language>\n  \
                 - Config file: Run 'lucid configure' to set defaults"
            )
        })?;
    let source = Language::parse(from)?;

    let to = options
        .to
        .as_ref()
        .or(config_file.lucid.to.as_ref())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: lucid --to <language>\n  \
                 - Config file: Run 'lucid configure' to set defaults"
            )
        })?;
    let target = Language::parse(to)?;

    let model = options
        .model
        .clone()
        .or_else(|| config_file.lucid.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = config_file
        .api
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let api_key = options
        .api_key
        .clone()
        .or_else(|| config_file.api.resolve_key());

    Ok(ResolvedConfig {
        endpoint,
        model,
        api_key,
        source,
        target,
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lucid/config.toml`
    /// or `~/.config/lucid/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
