//! # lingo - Interactive AI Translation CLI
//!
//! `lingo` translates text between natural languages by delegating to an
//! OpenAI-compatible chat-completions endpoint. It runs either as a
//! single-shot command or as an interactive session with backslash
//! commands.
//!
//! ## Quick Start
//!
//! ```bash
//! # One-off translation
//! lingo English French --text "Hello"
//!
//! # Interactive session (prompts for missing languages)
//! lingo
//!
//! # Different model and provider
//! lingo English Japanese --model llama3.2 --model-provider ollama
//! ```
//!
//! ## Interactive commands
//!
//! Inside a session, lines starting with a backslash are commands
//! (`\source`, `\target`, `\set`, `\history`, `\help`, `\exit`); anything
//! else is translated.
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [lingo]
//! source_language = "English"
//! target_language = "Japanese"
//! model = "gemini-2.5-flash"
//! model_provider = "google"
//!
//! [providers.mycorp]
//! endpoint = "https://llm.internal/v1"
//! api_key_env = "MYCORP_API_KEY"
//! ```

/// Interactive translation mode (REPL loop and backslash commands).
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Core translation session: configuration, prompting, history, and the
/// model client.
pub mod translator;

/// Terminal UI components (spinner, colors).
pub mod ui;
