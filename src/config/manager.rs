use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translator::{ConfigError, DEFAULT_MAX_HISTORY};

/// Model used when neither CLI nor config file names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider used when neither CLI nor config file names one.
pub const DEFAULT_PROVIDER: &str = "google";

/// Default settings in the `[lingo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LingoConfig {
    /// Default source language (English name).
    pub source_language: Option<String>,
    /// Default target language (English name).
    pub target_language: Option<String>,
    /// Default model identifier.
    pub model: Option<String>,
    /// Default model provider name.
    pub model_provider: Option<String>,
    /// Number of translation pairs kept in session history.
    pub max_history: Option<usize>,
}

/// Configuration for a model provider.
///
/// Each provider has an OpenAI-compatible endpoint and optional API key
/// settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lingo: LingoConfig,
    /// Provider configurations keyed by name, overriding built-ins.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

/// Built-in providers available without any config file.
pub fn builtin_providers() -> HashMap<String, ProviderConfig> {
    let entries = [
        (
            "google",
            "https://generativelanguage.googleapis.com/v1beta/openai",
            Some("GEMINI_API_KEY"),
        ),
        ("openai", "https://api.openai.com/v1", Some("OPENAI_API_KEY")),
        (
            "openrouter",
            "https://openrouter.ai/api/v1",
            Some("OPENROUTER_API_KEY"),
        ),
        ("ollama", "http://localhost:11434/v1", None),
    ];

    entries
        .into_iter()
        .map(|(name, endpoint, api_key_env)| {
            (
                name.to_string(),
                ProviderConfig {
                    endpoint: endpoint.to_string(),
                    api_key: None,
                    api_key_env: api_key_env.map(str::to_string),
                },
            )
        })
        .collect()
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language override.
    pub source_language: Option<String>,
    /// Target language override.
    pub target_language: Option<String>,
    /// Model identifier override.
    pub model: Option<String>,
    /// Provider name override.
    pub model_provider: Option<String>,
}

/// Settings after merging CLI options, config file, and built-in defaults.
///
/// Languages may still be absent here; the caller prompts for them before
/// constructing a session.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    /// Source language, if any layer named one.
    pub source_language: Option<String>,
    /// Target language, if any layer named one.
    pub target_language: Option<String>,
    /// The model identifier.
    pub model: String,
    /// The selected provider name.
    pub provider_name: String,
    /// The selected provider's endpoint and key settings.
    pub provider: ProviderConfig,
    /// History capacity for the session.
    pub max_history: usize,
}

/// Resolves settings by merging CLI options with config file values and
/// built-in defaults. CLI options win over the file; the file wins over
/// built-ins.
///
/// # Errors
///
/// Fails with [`ConfigError::UnknownProvider`] when the selected provider
/// is neither built in nor configured in the file.
pub fn resolve_settings(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedSettings, ConfigError> {
    let provider_name = options
        .model_provider
        .clone()
        .or_else(|| config_file.lingo.model_provider.clone())
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let mut providers = builtin_providers();
    for (name, provider) in &config_file.providers {
        providers.insert(name.clone(), provider.clone());
    }

    let provider = providers.get(&provider_name).cloned().ok_or_else(|| {
        let mut available: Vec<String> = providers.keys().cloned().collect();
        available.sort();
        ConfigError::UnknownProvider {
            name: provider_name.clone(),
            available,
        }
    })?;

    let model = options
        .model
        .clone()
        .or_else(|| config_file.lingo.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    Ok(ResolvedSettings {
        source_language: options
            .source_language
            .clone()
            .or_else(|| config_file.lingo.source_language.clone()),
        target_language: options
            .target_language
            .clone()
            .or_else(|| config_file.lingo.target_language.clone()),
        model,
        provider_name,
        provider,
        max_history: config_file.lingo.max_history.unwrap_or(DEFAULT_MAX_HISTORY),
    })
}

/// Manages loading and saving the defaults file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `$XDG_CONFIG_HOME/lingo/config.toml`
    /// (or `~/.config/lingo/config.toml`).
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
