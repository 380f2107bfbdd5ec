use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A stderr spinner shown while a model call is in flight.
///
/// Clears itself when dropped (RAII pattern), so an error path never
/// leaves a stale spinner on the terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a spinner with the given message.
    #[allow(clippy::unwrap_used)]
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
