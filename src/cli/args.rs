use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lucid")]
#[command(about = "AI-powered code translation and explanation CLI")]
#[command(version)]
pub struct Args {
    /// Source file to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language (e.g., python, javascript, c++)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language (e.g., javascript, html, sql)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API key (overrides environment and config file)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Print only the translated code, without the explanation
    #[arg(short = 'c', long)]
    pub code_only: bool,

    /// Also write the translated code to a file
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure default settings
    Configure,
    /// List supported languages
    Languages,
    /// Interactive session: translate code, then ask questions about it
    Chat {
        /// Source file to translate on startup
        file: Option<String>,

        /// Source language (e.g., python, javascript, c++)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language (e.g., javascript, html, sql)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// API key (overrides environment and config file)
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
}
