use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::output;

/// Progress indicator drawn on stderr for the duration of one request.
///
/// `--quiet` swaps in a hidden bar; indicatif skips drawing on a non-terminal
/// stderr. The line is wiped on drop, so an early `?` return leaves no residue.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Starts ticking next to `message`.
    #[allow(clippy::unwrap_used)]
    pub fn new(message: &str) -> Self {
        if output::is_quiet() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_draw_target(ProgressDrawTarget::stderr());
        // constant template
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["-", "\\", "|", "/", " "])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar }
    }

    /// Removes the spinner line before the result is printed.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
