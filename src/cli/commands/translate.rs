use anyhow::Result;

use super::setup::{SessionOptions, build_session};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub session: SessionOptions,
    pub text: String,
}

/// Performs exactly one translation and prints only the translated text.
///
/// Translation failures propagate and terminate the process with a
/// non-zero status.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let mut session = build_session(&options.session)?;

    let spinner = Spinner::start("Translating...");
    let result = session.translate(&options.text).await;
    spinner.stop();

    let translation = result?;
    println!("{translation}");
    Ok(())
}
