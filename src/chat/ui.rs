//! Chat mode UI components.

use crate::session::Speaker;
use crate::translation::TranslationOutcome;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Code Assistant",
        Style::header("lucid"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig) {
    let key_status = if config.api_key.is_some() {
        Style::success("set")
    } else {
        Style::warning("not set")
    };

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        Style::value(config.source)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::value(config.target)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!("  {}    {key_status}", Style::label("api key"));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}       {}",
        Style::command("/code"),
        Style::secondary("Open your editor to paste code for translation")
    );
    println!(
        "  {}  {}",
        Style::command("/translate"),
        Style::secondary("Translate a source file: /translate <file>")
    );
    println!(
        "  {}        {}",
        Style::command("/set"),
        Style::secondary("Change a setting: /set <from|to|model|key> <value>")
    );
    println!(
        "  {}      {}",
        Style::command("/reset"),
        Style::secondary("Clear the translation and chat history")
    );
    println!(
        "  {}     {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}       {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}       {}",
        Style::command("/quit"),
        Style::secondary("Exit the session")
    );
    println!();
    println!(
        "{}",
        Style::secondary("Anything else is a question about the translated code.")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

/// Prints a completed translation: the extracted code, then the explanation.
pub fn print_translation(outcome: &TranslationOutcome) {
    println!("{}", outcome.display_code());
    println!();
    println!("{}", Style::header("Explanation"));
    println!("{}", outcome.explanation);
    println!();
}

/// Prints one chat answer with its speaker tag.
pub fn print_answer(answer: &str) {
    println!("{} {answer}", Style::speaker(Speaker::Assistant));
    println!();
}
