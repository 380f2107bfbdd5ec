use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::TranslateError;

/// A single message in a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Capability to invoke a chat model with a prepared message list.
///
/// The production implementation talks to an OpenAI-compatible endpoint;
/// tests substitute stubs.
#[allow(async_fn_in_trait)]
pub trait ChatModel {
    /// Sends the messages and returns the model's raw text response.
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, TranslateError>;
}

// Message content is borrowed for serialization only
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client bound to one endpoint and model.
///
/// The binding is fixed at construction; later configuration changes to
/// `model` or `model_provider` do not affect an acquired client.
pub struct ModelClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ModelClient {
    /// Creates a client for the given endpoint and model.
    ///
    /// The credential is moved in here; it is never published through the
    /// process environment.
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }
}

impl ChatModel for ModelClient {
    async fn invoke(&self, messages: &[ChatMessage]) -> Result<String, TranslateError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, message });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        extract_content(completion).ok_or(TranslateError::EmptyResponse)
    }
}

/// Extracts the first choice's content, treating empty content as missing.
fn extract_content(response: ChatCompletionResponse) -> Option<String> {
    let content = response.choices.into_iter().next()?.message.content?;
    if content.is_empty() { None } else { Some(content) }
}
