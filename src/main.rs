use anyhow::Result;
use clap::Parser;

use lucid_cli::cli::commands::{chat, configure, translate};
use lucid_cli::cli::{Args, Command};
use lucid_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        Some(Command::Chat {
            file,
            from,
            to,
            model,
            api_key,
        }) => {
            let options = chat::ChatOptions {
                file,
                from,
                to,
                model,
                api_key,
            };
            chat::run_chat(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                model: args.model,
                api_key: args.api_key,
                code_only: args.code_only,
                output: args.output,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
