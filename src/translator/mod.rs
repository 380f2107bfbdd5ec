//! Core translation session.
//!
//! Composes a validated configuration, a prompt template derived from the
//! language pair, a chat-model handle, and a bounded translation history.

mod client;
mod config;
mod error;
mod history;
mod prompt;
mod session;

pub use client::{ChatMessage, ChatModel, ModelClient};
pub use config::{ConfigField, DEFAULT_MAX_HISTORY, TranslatorConfig};
pub use error::{ConfigError, TranslateError};
pub use history::{History, TranslationPair};
pub use prompt::PromptTemplate;
pub use session::{SetOutcome, TranslatorSession};
