use anyhow::Result;

use super::setup::{SessionOptions, build_session};
use crate::chat::{ChatSession, SessionEnd};

/// Runs the interactive translation loop until `\exit` or interruption.
pub async fn run_chat(options: SessionOptions) -> Result<SessionEnd> {
    let session = build_session(&options)?;
    let mut chat = ChatSession::new(session);
    chat.run().await
}
