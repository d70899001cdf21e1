//! Progress reporting for provider calls

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nexus_application::{Operation, ProgressNotifier, ResultSource};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a "Thinking..." spinner while a provider call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn operation_display_name(operation: Operation) -> &'static str {
        match operation {
            Operation::Search => "Search",
            Operation::ContentSynthesis => "Description",
            Operation::QuestionAnswering => "Question",
        }
    }

    fn outcome_label(source: ResultSource) -> String {
        match source {
            ResultSource::Provider | ResultSource::Cache => format!("{}", "done".green()),
            ResultSource::Fallback(kind) => format!("{} ({})", "offline".yellow(), kind),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_provider_call_start(&self, operation: Operation) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::operation_display_name(operation));
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_provider_call_end(&self, _operation: Operation, source: ResultSource) {
        let spinner = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pb) = spinner {
            pb.finish_and_clear();
            if source.is_fallback() {
                eprintln!("{} {}", "!".yellow(), Self::outcome_label(source));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_provider_call_start(&self, operation: Operation) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::operation_display_name(operation).bold(),
            "Thinking...".dimmed()
        );
    }

    fn on_provider_call_end(&self, operation: Operation, source: ResultSource) {
        eprintln!(
            "   {} {}",
            ProgressReporter::operation_display_name(operation),
            ProgressReporter::outcome_label(source)
        );
    }
}
