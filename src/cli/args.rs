use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "AI-powered interactive translation CLI")]
#[command(version)]
pub struct Args {
    /// Source language name (e.g., English); prompted for if omitted
    pub source_language: Option<String>,

    /// Target language name (e.g., French); prompted for if omitted
    pub target_language: Option<String>,

    /// Model identifier
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Model provider name (google, openai, openrouter, ollama, or one
    /// configured in config.toml)
    #[arg(short = 'p', long)]
    pub model_provider: Option<String>,

    /// Translate this text and exit instead of starting the interactive loop
    #[arg(short = 't', long)]
    pub text: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_languages() {
        let args = Args::try_parse_from(["lingo", "English", "French"]).unwrap();
        assert_eq!(args.source_language.as_deref(), Some("English"));
        assert_eq!(args.target_language.as_deref(), Some("French"));
        assert!(args.text.is_none());
    }

    #[test]
    fn test_parse_no_arguments() {
        let args = Args::try_parse_from(["lingo"]).unwrap();
        assert!(args.source_language.is_none());
        assert!(args.target_language.is_none());
    }

    #[test]
    fn test_parse_single_shot_options() {
        let args = Args::try_parse_from([
            "lingo",
            "English",
            "Japanese",
            "--model",
            "gpt-4o-mini",
            "--model-provider",
            "openai",
            "--text",
            "Good morning",
        ])
        .unwrap();

        assert_eq!(args.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(args.model_provider.as_deref(), Some("openai"));
        assert_eq!(args.text.as_deref(), Some("Good morning"));
    }

    #[test]
    fn test_parse_short_flags() {
        let args =
            Args::try_parse_from(["lingo", "-t", "hi", "-m", "llama3.2", "-p", "ollama"]).unwrap();
        assert_eq!(args.text.as_deref(), Some("hi"));
        assert_eq!(args.model.as_deref(), Some("llama3.2"));
        assert_eq!(args.model_provider.as_deref(), Some("ollama"));
    }
}
