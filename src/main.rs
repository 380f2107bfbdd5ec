use anyhow::Result;
use clap::Parser;

use lingo_cli::chat::SessionEnd;
use lingo_cli::cli::Args;
use lingo_cli::cli::commands::setup::SessionOptions;
use lingo_cli::cli::commands::{chat, translate};

/// Exit code reported when the interactive loop is interrupted.
const INTERRUPTED: exitcode::ExitCode = 130;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let options = SessionOptions {
        source_language: args.source_language,
        target_language: args.target_language,
        model: args.model,
        model_provider: args.model_provider,
    };

    match args.text {
        Some(text) => {
            let options = translate::TranslateOptions {
                session: options,
                text,
            };
            translate::run_translate(options).await?;
        }
        None => {
            if chat::run_chat(options).await? == SessionEnd::Interrupted {
                std::process::exit(INTERRUPTED);
            }
        }
    }

    Ok(())
}
