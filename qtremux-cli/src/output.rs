// ============================================================================
// qtremux-cli/src/output.rs
// ============================================================================
//
// TERMINAL OUTPUT: status lines and progress rendering
//
// This module is the only place the CLI writes to the terminal. The core
// library streams bare percent values; everything human-facing (the bar,
// the spinner for unknown durations, colored status lines) lives here.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use qtremux_core::ProgressUpdate;
use std::time::Duration;

/// Prints a labeled status line ("Video codec: hevc").
pub fn print_status(label: &str, value: &str) {
    println!("{} {value}", format!("{label}:").bold());
}

/// Prints a success line with a green check mark.
pub fn print_success(msg: &str) {
    println!("{} {msg}", "✓".green().bold());
}

/// Prints a failure line with a red cross to stderr.
pub fn print_failure(msg: &str) {
    eprintln!("{} {msg}", "✗".red().bold());
}

/// Prints a fatal error to stderr.
pub fn print_cli_error(msg: &str) {
    eprintln!("{} {msg}", "Error:".red().bold());
}

/// Renders the core's progress stream on the terminal.
///
/// Attended terminals get an indicatif bar (or a spinner when the source
/// duration is unknown and no percentage can be computed); unattended
/// runs log a line per decile instead, so piped output stays readable.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    last_logged_decile: i64,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(determinate: bool) -> Self {
        if !console::user_attended_stderr() {
            return Self {
                bar: None,
                last_logged_decile: -1,
            };
        }

        let bar = if determinate {
            let bar = ProgressBar::new(100);
            if let Ok(style) =
                ProgressStyle::with_template("{bar:40.cyan/blue} {percent:>3}% ({elapsed})")
            {
                bar.set_style(style);
            }
            bar
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("remuxing (duration unknown)");
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner
        };

        Self {
            bar: Some(bar),
            last_logged_decile: -1,
        }
    }

    pub fn update(&mut self, update: ProgressUpdate) {
        match &self.bar {
            Some(bar) => bar.set_position(update.percent as u64),
            None => {
                let decile = (update.percent as i64) / 10;
                if decile > self.last_logged_decile {
                    log::info!("Remux progress: {:.2}%", update.percent);
                    self.last_logged_decile = decile;
                }
            }
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
