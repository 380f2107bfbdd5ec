use super::error::ConfigError;

/// Default number of translation pairs kept in session history.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Configuration for a translator session.
///
/// Languages are free-form English names ("English", "Japanese"), not
/// ISO codes; they are validated only for non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// English name of the source language.
    pub source_language: String,
    /// English name of the target language.
    pub target_language: String,
    /// Identifier of the translation model.
    pub model: String,
    /// Name of the provider serving the model.
    pub model_provider: String,
    /// Maximum number of translation pairs kept in history.
    pub max_history: usize,
}

impl TranslatorConfig {
    /// Creates a configuration with the default history capacity.
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        model: impl Into<String>,
        model_provider: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            model: model.into(),
            model_provider: model_provider.into(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingLanguage`] if either language is
    /// empty or blank, and [`ConfigError::InvalidMaxHistory`] if the
    /// history capacity is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_language.trim().is_empty() || self.target_language.trim().is_empty() {
            return Err(ConfigError::MissingLanguage);
        }
        if self.max_history == 0 {
            return Err(ConfigError::InvalidMaxHistory);
        }
        Ok(())
    }

    /// Applies a single-field update.
    ///
    /// String fields accept any value without further validation;
    /// `max_history` must parse as a positive integer.
    pub fn apply(&mut self, field: ConfigField, value: &str) -> Result<(), ConfigError> {
        match field {
            ConfigField::SourceLanguage => self.source_language = value.to_string(),
            ConfigField::TargetLanguage => self.target_language = value.to_string(),
            ConfigField::Model => self.model = value.to_string(),
            ConfigField::ModelProvider => self.model_provider = value.to_string(),
            ConfigField::MaxHistory => {
                let capacity: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidMaxHistory)?;
                if capacity == 0 {
                    return Err(ConfigError::InvalidMaxHistory);
                }
                self.max_history = capacity;
            }
        }
        Ok(())
    }
}

/// The closed set of configuration fields that can change at runtime.
///
/// Replaces by-name attribute mutation with typed variants; keys that
/// map to no variant are reported to the caller and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    SourceLanguage,
    TargetLanguage,
    Model,
    ModelProvider,
    MaxHistory,
}

impl ConfigField {
    /// Maps a user-supplied key to a field. Returns `None` for keys that
    /// name no configuration field.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "source_language" => Some(Self::SourceLanguage),
            "target_language" => Some(Self::TargetLanguage),
            "model" => Some(Self::Model),
            "model_provider" => Some(Self::ModelProvider),
            "max_history" => Some(Self::MaxHistory),
            _ => None,
        }
    }

    /// The canonical key for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SourceLanguage => "source_language",
            Self::TargetLanguage => "target_language",
            Self::Model => "model",
            Self::ModelProvider => "model_provider",
            Self::MaxHistory => "max_history",
        }
    }

    /// Whether changing this field invalidates the prompt template.
    pub const fn affects_prompt(self) -> bool {
        matches!(self, Self::SourceLanguage | Self::TargetLanguage)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> TranslatorConfig {
        TranslatorConfig::new("English", "French", "gemini-2.5-flash", "google")
    }

    #[test]
    fn test_validate_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_source_language() {
        let mut config = config();
        config.source_language = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingLanguage)
        ));
    }

    #[test]
    fn test_validate_blank_target_language() {
        let mut config = config();
        config.target_language = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingLanguage)
        ));
    }

    #[test]
    fn test_validate_zero_max_history() {
        let mut config = config();
        config.max_history = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMaxHistory)
        ));
    }

    #[test]
    fn test_default_max_history() {
        assert_eq!(config().max_history, DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_parse_known_fields() {
        assert_eq!(
            ConfigField::parse("source_language"),
            Some(ConfigField::SourceLanguage)
        );
        assert_eq!(
            ConfigField::parse("target_language"),
            Some(ConfigField::TargetLanguage)
        );
        assert_eq!(ConfigField::parse("model"), Some(ConfigField::Model));
        assert_eq!(
            ConfigField::parse("model_provider"),
            Some(ConfigField::ModelProvider)
        );
        assert_eq!(
            ConfigField::parse("max_history"),
            Some(ConfigField::MaxHistory)
        );
    }

    #[test]
    fn test_parse_unknown_field() {
        assert_eq!(ConfigField::parse("temperature"), None);
        assert_eq!(ConfigField::parse(""), None);
    }

    #[test]
    fn test_apply_language() {
        let mut config = config();
        config
            .apply(ConfigField::TargetLanguage, "Spanish")
            .unwrap();
        assert_eq!(config.target_language, "Spanish");
    }

    #[test]
    fn test_apply_max_history() {
        let mut config = config();
        config.apply(ConfigField::MaxHistory, "5").unwrap();
        assert_eq!(config.max_history, 5);
    }

    #[test]
    fn test_apply_max_history_rejects_non_integer() {
        let mut config = config();
        assert!(matches!(
            config.apply(ConfigField::MaxHistory, "many"),
            Err(ConfigError::InvalidMaxHistory)
        ));
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_apply_max_history_rejects_zero() {
        let mut config = config();
        assert!(matches!(
            config.apply(ConfigField::MaxHistory, "0"),
            Err(ConfigError::InvalidMaxHistory)
        ));
        assert_eq!(config.max_history, DEFAULT_MAX_HISTORY);
    }

    #[test]
    fn test_field_key_round_trips() {
        for field in [
            ConfigField::SourceLanguage,
            ConfigField::TargetLanguage,
            ConfigField::Model,
            ConfigField::ModelProvider,
            ConfigField::MaxHistory,
        ] {
            assert_eq!(ConfigField::parse(field.key()), Some(field));
        }
    }
}
