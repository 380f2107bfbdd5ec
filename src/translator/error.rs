//! Error types for session construction and translation calls.

use thiserror::Error;

/// Errors that make a configuration unusable.
///
/// These are fatal: a session must not be constructed from a
/// configuration that fails validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source or target language is empty or blank.
    #[error("source and target languages must be specified")]
    MissingLanguage,

    /// History capacity is zero or not a valid integer.
    #[error("max history size must be a positive integer")]
    InvalidMaxHistory,

    /// The named provider has no endpoint configured.
    #[error(
        "unknown model provider: '{name}'\n\nAvailable providers:\n  - {}",
        .available.join("\n  - ")
    )]
    UnknownProvider {
        name: String,
        available: Vec<String>,
    },
}

/// Errors occurring during a single translate call.
///
/// Recovered at the interactive-loop boundary; in single-shot mode they
/// propagate and terminate the process with a non-zero status.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The input text was empty or whitespace-only.
    #[error("empty text provided")]
    EmptyInput,

    /// The request to the model endpoint could not be completed.
    #[error("request to model endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The model endpoint answered with a non-success status.
    #[error("model endpoint returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The model answered, but with no usable content.
    #[error("empty response from model")]
    EmptyResponse,
}
