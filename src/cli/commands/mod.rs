//! Command handlers.

/// Interactive mode handler.
pub mod chat;

/// Shared session bootstrapping.
pub mod setup;

/// Single-shot translation handler.
pub mod translate;
