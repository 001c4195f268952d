//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, LucidConfig};
use crate::translation::{DEFAULT_MODEL, Language};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
///
/// Interactively sets the default source language, target language, and
/// model. The API key is not prompted for here; it is supplied via the
/// `--api-key` flag, the environment, or the `[api]` section of the config
/// file.
pub fn run_configure() -> Result<()> {
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let from = select_language("Default source language:", config.lucid.from.as_deref())?;
    let to = select_language("Default target language:", config.lucid.to.as_deref())?;
    let model = prompt_model(config.lucid.model.as_deref())?;

    config.lucid = LucidConfig {
        from: Some(from),
        to: Some(to),
        model: Some(model),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}   {}",
        Style::label("from"),
        config
            .lucid
            .from
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("to"),
        config
            .lucid
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("model"),
        config
            .lucid
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn select_language(message: &str, default: Option<&str>) -> Result<String> {
    let options: Vec<String> = Language::ALL
        .iter()
        .map(|language| language.name().to_string())
        .collect();

    let default_index = default
        .and_then(|d| Language::parse(d).ok())
        .and_then(|language| Language::ALL.iter().position(|l| *l == language))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn prompt_model(default: Option<&str>) -> Result<String> {
    let model = Text::new("Default model:")
        .with_help_message("A model name the endpoint serves")
        .with_default(default.unwrap_or(DEFAULT_MODEL))
        .prompt()?;

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    Ok(model.trim().to_string())
}
