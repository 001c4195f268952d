//! # lucid - AI Code Translation CLI
//!
//! `lucid` translates source code between languages using an LLM behind an
//! OpenAI-compatible chat-completion endpoint, explains the result, and
//! answers follow-up questions about it.
//!
//! ## Features
//!
//! - **Translate & explain**: one command turns a snippet into another
//!   language plus a high-level explanation
//! - **Webpage mode**: HTML/CSS targets render the source as a webpage
//!   instead of a literal translation
//! - **Follow-up chat**: interactive mode keeps the translation as context
//!   for questions with `lucid chat`
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! lucid --from python --to javascript ./script.py
//!
//! # Translate from stdin, keep only the code
//! cat query.sql | lucid --from sql --to python --code-only
//!
//! # Interactive session
//! lucid chat --from python --to javascript ./script.py
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/lucid/config.toml`:
//!
//! ```toml
//! [lucid]
//! from = "python"
//! to = "javascript"
//! model = "llama3-70b-8192"
//!
//! [api]
//! endpoint = "https://api.groq.com/openai"
//! api_key_env = "GROQ_API_KEY"
//! ```

/// Interactive chat mode for translate-then-discuss sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Input reading from files and stdin.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Transient per-session state.
pub mod session;

/// Prompt construction, completion client, and response parsing.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
