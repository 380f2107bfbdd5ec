use super::client::ChatModel;
use super::config::{ConfigField, TranslatorConfig};
use super::error::{ConfigError, TranslateError};
use super::history::{History, TranslationPair};
use super::prompt::PromptTemplate;

/// The outcome of a runtime configuration update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// The field was changed to the given value.
    Updated { key: &'static str, value: String },
    /// No configuration field has that key; nothing was changed.
    UnknownKey(String),
    /// The value could not be applied to the field; nothing was changed.
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

/// A translation session around one chat model handle.
///
/// Owns the configuration, the prompt template derived from its language
/// pair, and a bounded history of completed translations. Generic over
/// the model capability so tests can substitute a stub.
pub struct TranslatorSession<M> {
    config: TranslatorConfig,
    template: PromptTemplate,
    model: M,
    history: History,
}

impl<M: ChatModel> TranslatorSession<M> {
    /// Creates a session from a configuration and an acquired model handle.
    ///
    /// # Errors
    ///
    /// Fails with [`ConfigError`] if the configuration does not validate.
    pub fn new(config: TranslatorConfig, model: M) -> Result<Self, ConfigError> {
        config.validate()?;
        let template = PromptTemplate::build(&config.source_language, &config.target_language);
        let history = History::with_capacity(config.max_history);
        Ok(Self {
            config,
            template,
            model,
            history,
        })
    }

    /// Translates `text` from the configured source language to the
    /// configured target language.
    ///
    /// Makes exactly one outbound model call, with no retries. On success
    /// the (text, translation) pair is recorded in history and the
    /// trimmed translation is returned. A failed call leaves history and
    /// configuration untouched.
    pub async fn translate(&mut self, text: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let messages = self.template.render(text);
        let response = self.model.invoke(&messages).await?;

        let translation = response.trim();
        if translation.is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        self.history.record(TranslationPair::new(text, translation));
        Ok(translation.to_string())
    }

    /// Applies a configuration change addressed by key.
    ///
    /// Changing a language field rebuilds the prompt template before
    /// returning. An unrecognized key or an invalid value changes
    /// nothing. Changes to `model` or `model_provider` do not affect the
    /// already-acquired model handle.
    pub fn set_config_value(&mut self, key: &str, value: &str) -> SetOutcome {
        let Some(field) = ConfigField::parse(key) else {
            return SetOutcome::UnknownKey(key.to_string());
        };

        if let Err(e) = self.config.apply(field, value) {
            return SetOutcome::InvalidValue {
                key: field.key(),
                message: e.to_string(),
            };
        }

        if field.affects_prompt() {
            self.template =
                PromptTemplate::build(&self.config.source_language, &self.config.target_language);
        }

        SetOutcome::Updated {
            key: field.key(),
            value: value.to_string(),
        }
    }

    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub const fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub const fn history(&self) -> &History {
        &self.history
    }
}
