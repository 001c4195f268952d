use anyhow::{Context, Result, bail};
use std::fs;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input;
use crate::translation::{
    CompletionClient, CompletionRequest, TranslationOutcome, build_translation_prompt,
};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub code_only: bool,
    pub output: Option<String>,
}

/// Runs a one-shot translate-and-explain action.
///
/// The extracted code goes to stdout (pipe-friendly); the explanation follows
/// unless `--code-only` is given.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
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

    // The credential gate comes first: without a key nothing is sent anywhere
    let api_key = resolved.require_api_key()?.to_string();

    let source_code = input::read_source(options.file.as_deref())?;
    if source_code.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let client = CompletionClient::new(resolved.endpoint.clone(), api_key);
    let prompt = build_translation_prompt(resolved.source, resolved.target, &source_code);
    let request = CompletionRequest::new(prompt, resolved.model.clone());

    let spinner = Spinner::new("Analyzing your code...");
    let response = client.complete(&request).await;
    spinner.stop();
    let response = response?;

    let outcome = TranslationOutcome::from_response(&response);
    let code = outcome.display_code();

    println!("{code}");

    if let Some(path) = &options.output {
        fs::write(path, format!("{code}\n"))
            .with_context(|| format!("Failed to write output file: {path}"))?;
        eprintln!("{} Wrote {}", Style::success("✓"), Style::secondary(path));
    }

    if !options.code_only {
        println!();
        println!("{}", Style::header("Explanation"));
        println!("{}", outcome.explanation);
    }

    Ok(())
}
