//! Shared session bootstrapping for both command handlers.
//!
//! Merges CLI overrides with the config file, prompts for anything still
//! missing, resolves the provider credential, and constructs the session.

use anyhow::Result;
use inquire::{Password, PasswordDisplayMode, Text};

use crate::config::{
    ConfigManager, ProviderConfig, ResolveOptions, ResolvedSettings, resolve_settings,
};
use crate::translator::{ModelClient, TranslatorConfig, TranslatorSession};
use crate::ui::{Style, is_prompt_cancelled};

/// CLI overrides collected from the argument parser.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
    pub model: Option<String>,
    pub model_provider: Option<String>,
}

/// Builds a ready translator session.
///
/// Configuration errors (unknown provider, invalid settings) are fatal
/// here; nothing network-facing happens until the first translate call.
pub fn build_session(options: &SessionOptions) -> Result<TranslatorSession<ModelClient>> {
    let manager = ConfigManager::new();
    let file_config = manager.load_or_default();

    let resolve_options = ResolveOptions {
        source_language: options.source_language.clone(),
        target_language: options.target_language.clone(),
        model: options.model.clone(),
        model_provider: options.model_provider.clone(),
    };
    let settings = resolve_settings(&resolve_options, &file_config)?;

    let source_language = match settings.source_language.clone() {
        Some(value) => value,
        None => prompt_required("Source language:")?,
    };
    let target_language = match settings.target_language.clone() {
        Some(value) => value,
        None => prompt_required("Target language:")?,
    };

    let api_key = resolve_api_key(&settings)?;

    let config = TranslatorConfig {
        source_language,
        target_language,
        model: settings.model.clone(),
        model_provider: settings.provider_name.clone(),
        max_history: settings.max_history,
    };

    let client = ModelClient::new(settings.provider.endpoint.clone(), settings.model, api_key);
    Ok(TranslatorSession::new(config, client)?)
}

/// Reads a non-empty line, re-prompting on blank input.
///
/// The value is required and there is no other way to obtain it, so
/// cancellation or end of input terminates the process.
fn prompt_required(label: &str) -> Result<String> {
    loop {
        match Text::new(label).prompt() {
            Ok(value) => {
                let value = value.trim().to_string();
                if !value.is_empty() {
                    return Ok(value);
                }
            }
            Err(e) if is_prompt_cancelled(&e) => exit_no_input(),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Resolves the provider credential: environment variable, then config
/// file, then a hidden interactive prompt.
///
/// The resolved value is handed to the model client directly and never
/// written back to the process environment. Providers without key
/// settings (e.g. ollama) resolve to `None`.
fn resolve_api_key(settings: &ResolvedSettings) -> Result<Option<String>> {
    let provider: &ProviderConfig = &settings.provider;

    if !provider.requires_api_key() {
        return Ok(None);
    }
    if let Some(key) = provider.get_api_key() {
        return Ok(Some(key));
    }

    let env_hint = provider.api_key_env.as_deref().unwrap_or("API_KEY");
    let label = format!("API key for '{}':", settings.provider_name);
    let help = format!("Set {env_hint} to skip this prompt");

    loop {
        match Password::new(&label)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message(&help)
            .prompt()
        {
            Ok(key) if !key.trim().is_empty() => return Ok(Some(key.trim().to_string())),
            Ok(_) => {}
            Err(e) if is_prompt_cancelled(&e) => exit_no_input(),
            Err(e) => return Err(e.into()),
        }
    }
}

fn exit_no_input() -> ! {
    eprintln!();
    eprintln!(
        "{} required input was not supplied",
        Style::error("Error:")
    );
    std::process::exit(exitcode::NOINPUT);
}
