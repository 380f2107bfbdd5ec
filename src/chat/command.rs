use inquire::autocompletion::{Autocomplete, Replacement};

// Available backslash commands: (command, description)
const COMMANDS: &[(&str, &str)] = &[
    ("\\exit", "Exit the translator"),
    ("\\help", "Show available commands"),
    ("\\history", "Show recorded translations"),
    ("\\set", "Change a configuration value"),
    ("\\source", "Change the source language"),
    ("\\target", "Change the target language"),
];

/// Backslash command autocompleter
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('\\') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Backslash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    History,
    Source(String),
    Target(String),
    Set { key: String, value: String },
    /// A backslash line missing its required argument.
    Incomplete(String),
    /// A backslash command the loop does not recognize.
    Unknown(String),
}

/// One line of interactive input
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(Command),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();

    if line.is_empty() {
        return Input::Empty;
    }

    if line.starts_with('\\') {
        Input::Command(parse_command(line))
    } else {
        Input::Text(line.to_string())
    }
}

fn parse_command(line: &str) -> Command {
    let mut parts = line.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or(line);
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match (name, arg) {
        ("\\exit", None) => Command::Exit,
        ("\\help", None) => Command::Help,
        ("\\history", None) => Command::History,
        ("\\source", Some(value)) => Command::Source(value.to_string()),
        ("\\target", Some(value)) => Command::Target(value.to_string()),
        ("\\set", Some(arg)) => parse_set(line, arg),
        (_, None) => Command::Incomplete(line.to_string()),
        (_, Some(_)) => Command::Unknown(line.to_string()),
    }
}

fn parse_set(line: &str, arg: &str) -> Command {
    let mut parts = arg.splitn(2, char::is_whitespace);
    let key = parts.next().unwrap_or(arg);
    let value = parts.next().map(str::trim).filter(|v| !v.is_empty());

    value.map_or_else(
        || Command::Incomplete(line.to_string()),
        |value| Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        },
    )
}
