use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Command, CommandCompleter, Input, parse_input};
use super::ui;
use crate::translator::{ChatModel, SetOutcome, TranslatorSession};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user left with `\exit`.
    Quit,
    /// The user interrupted the prompt (Ctrl+C / Esc).
    Interrupted,
}

/// The interactive loop around a translator session.
///
/// Reads lines, dispatches backslash commands, translates everything
/// else. Translation failures are printed and the loop continues.
pub struct ChatSession<M> {
    session: TranslatorSession<M>,
}

impl<M: ChatModel> ChatSession<M> {
    pub fn new(session: TranslatorSession<M>) -> Self {
        Self { session }
    }

    pub async fn run(&mut self) -> Result<SessionEnd> {
        ui::print_header();
        ui::print_config(self.session.config());
        ui::print_help();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(CommandCompleter)
                .with_help_message("Type text to translate, \\help for commands, \\exit to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!();
                    println!(
                        "{}",
                        Style::secondary("Interrupted. Next time, enter \\exit to quit.")
                    );
                    return Ok(SessionEnd::Interrupted);
                }
                Err(e) => return Err(e.into()),
            }
        }

        println!("{}", Style::success("Goodbye!"));
        Ok(SessionEnd::Quit)
    }

    /// Returns `false` when the loop should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Exit => return false,
            Command::Help => ui::print_help(),
            Command::History => ui::print_history(self.session.history()),
            Command::Source(value) => self.apply_setting("source_language", &value),
            Command::Target(value) => self.apply_setting("target_language", &value),
            Command::Set { key, value } => self.apply_setting(&key, &value),
            Command::Incomplete(line) => {
                ui::print_error(&format!("Incomplete command: \"{line}\""));
            }
            Command::Unknown(line) => {
                ui::print_error(&format!("Unrecognized command: \"{line}\""));
            }
        }
        true
    }

    fn apply_setting(&mut self, key: &str, value: &str) {
        match self.session.set_config_value(key, value) {
            SetOutcome::Updated { key, value } => {
                println!(
                    "{} Changed {} to {}",
                    Style::success("✓"),
                    Style::label(key),
                    Style::value(&value)
                );
                println!();
                ui::print_config(self.session.config());
            }
            SetOutcome::UnknownKey(key) => {
                ui::print_error(&format!(
                    "Config key '{key}' does not exist. Ignored command."
                ));
            }
            SetOutcome::InvalidValue { key, message } => {
                ui::print_error(&format!("Cannot set {key}: {message}"));
            }
        }
    }

    async fn translate_and_print(&mut self, text: &str) {
        let spinner = Spinner::start("Translating...");
        let result = self.session.translate(text).await;
        spinner.stop();

        match result {
            Ok(translation) => {
                println!("{translation}");
                println!();
            }
            Err(e) => ui::print_error(&format!("Translation failed: {e}")),
        }
    }
}
