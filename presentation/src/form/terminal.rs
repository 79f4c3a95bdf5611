//! Terminal implementation of the form ports
//!
//! The question input is whatever line the user submitted last, the result
//! region is stdout, and alerts go to stderr.

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use query_form_application::{FormHost, QueryFormView};
use query_form_domain::{OutputFormat, ResultView, SEARCHING_PLACEHOLDER};
use std::sync::{Arc, Mutex};

/// Question input and result region backed by the terminal
pub struct TerminalForm {
    question: Mutex<String>,
    region: Mutex<Option<ResultView>>,
    config: OutputConfig,
    progress: ProgressReporter,
}

impl TerminalForm {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            question: Mutex::new(String::new()),
            region: Mutex::new(None),
            config,
            progress: ProgressReporter::new(),
        }
    }

    /// Set the value of the question input
    pub fn set_question(&self, question: impl Into<String>) {
        *self.question.lock().unwrap_or_else(|e| e.into_inner()) = question.into();
    }

    /// Current state of the result region (`None` before the first submit)
    pub fn region(&self) -> Option<ResultView> {
        self.region
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Current content of the result region in the configured format
    pub fn region_content(&self) -> Option<String> {
        self.region()
            .map(|view| ConsoleFormatter::format(&view, self.config.format))
    }

    fn uses_spinner(&self) -> bool {
        self.config.show_progress && self.config.format == OutputFormat::Text
    }
}

impl QueryFormView for TerminalForm {
    fn question(&self) -> String {
        self.question
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_alert(message));
    }

    fn render(&self, view: &ResultView) {
        *self.region.lock().unwrap_or_else(|e| e.into_inner()) = Some(view.clone());

        if view.is_pending() && self.uses_spinner() {
            self.progress.start(SEARCHING_PLACEHOLDER);
            return;
        }

        self.progress.finish();
        println!("{}", ConsoleFormatter::format(view, self.config.format));
    }
}

/// Terminal host: the submit control is the Enter key (or the command line
/// itself in single-shot mode), so it is always present.
pub struct TerminalHost {
    view: Arc<TerminalForm>,
}

impl TerminalHost {
    pub fn new(view: Arc<TerminalForm>) -> Self {
        Self { view }
    }
}

impl FormHost for TerminalHost {
    type View = TerminalForm;

    fn has_submit_control(&self) -> bool {
        true
    }

    fn view(&self) -> Arc<TerminalForm> {
        Arc::clone(&self.view)
    }
}
