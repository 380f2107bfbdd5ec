//! Interactive mode UI components.

use crate::translator::{History, TranslatorConfig};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("lingo"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_config(config: &TranslatorConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}  {}",
        Style::label("source_language"),
        Style::value(&config.source_language)
    );
    println!(
        "  {}  {}",
        Style::label("target_language"),
        Style::value(&config.target_language)
    );
    println!(
        "  {}            {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("model_provider"),
        Style::value(&config.model_provider)
    );
    println!(
        "  {}      {}",
        Style::label("max_history"),
        Style::value(config.max_history)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}             {}",
        Style::command("\\exit"),
        Style::secondary("Exit the translator")
    );
    println!(
        "  {}             {}",
        Style::command("\\help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}          {}",
        Style::command("\\history"),
        Style::secondary("Show recorded translations")
    );
    println!(
        "  {}  {}",
        Style::command("\\set <key> <value>"),
        Style::secondary("Change a configuration value")
    );
    println!(
        "  {}   {}",
        Style::command("\\source <language>"),
        Style::secondary("Change the source language")
    );
    println!(
        "  {}   {}",
        Style::command("\\target <language>"),
        Style::secondary("Change the target language")
    );
    println!();
    println!(
        "{}",
        Style::secondary("Any other input is translated and printed.")
    );
    println!();
}

pub fn print_history(history: &History) {
    println!("{}", Style::header("History"));
    if history.is_empty() {
        println!("  {}", Style::secondary("(no translations recorded)"));
    } else {
        for pair in history.pairs() {
            println!(
                "  {}  {}",
                Style::secondary(&pair.source_text),
                Style::value(&pair.translated_text)
            );
        }
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
