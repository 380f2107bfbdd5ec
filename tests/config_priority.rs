//! Settings priority contract tests.
//!
//! CLI options win over config file values, which win over built-in
//! defaults.

use std::collections::HashMap;

use lingo_cli::config::{
    ConfigFile, DEFAULT_MODEL, DEFAULT_PROVIDER, LingoConfig, ProviderConfig, ResolveOptions,
    resolve_settings,
};
use lingo_cli::translator::DEFAULT_MAX_HISTORY;

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local/v1".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
        },
    );

    ConfigFile {
        lingo: LingoConfig {
            source_language: Some("German".to_string()),
            target_language: Some("Italian".to_string()),
            model: Some("config_model".to_string()),
            model_provider: Some("test_provider".to_string()),
            max_history: Some(10),
        },
        providers,
    }
}

#[test]
fn test_cli_options_override_config_file() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        source_language: Some("English".to_string()),
        target_language: Some("French".to_string()),
        model: Some("cli_model".to_string()),
        model_provider: Some("ollama".to_string()),
    };

    let resolved = resolve_settings(&options, &config).unwrap();

    assert_eq!(resolved.source_language.as_deref(), Some("English"));
    assert_eq!(resolved.target_language.as_deref(), Some("French"));
    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.provider_name, "ollama");
}

#[test]
fn test_config_file_fills_missing_cli_options() {
    let config = make_config_with_defaults();

    let resolved = resolve_settings(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.source_language.as_deref(), Some("German"));
    assert_eq!(resolved.target_language.as_deref(), Some("Italian"));
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.provider.endpoint, "http://test.local/v1");
    assert_eq!(resolved.max_history, 10);
}

#[test]
fn test_builtin_defaults_apply_last() {
    let resolved = resolve_settings(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.model, DEFAULT_MODEL);
    assert_eq!(resolved.provider_name, DEFAULT_PROVIDER);
    assert_eq!(resolved.max_history, DEFAULT_MAX_HISTORY);
    assert!(resolved.source_language.is_none());
    assert!(resolved.target_language.is_none());
}

#[test]
fn test_cli_provider_selects_builtin_even_with_file_default() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model_provider: Some("google".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "google");
    assert_eq!(
        resolved.provider.api_key_env.as_deref(),
        Some("GEMINI_API_KEY")
    );
}

#[test]
fn test_unknown_provider_error_lists_file_providers() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model_provider: Some("missing".to_string()),
        ..ResolveOptions::default()
    };

    let err = resolve_settings(&options, &config).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("'missing'"));
    assert!(message.contains("test_provider"));
    assert!(message.contains("ollama"));
}
