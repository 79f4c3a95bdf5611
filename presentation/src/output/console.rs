//! Console output formatter for the result region

use colored::Colorize;
use query_form_domain::{ERROR_BANNER, OutputFormat, ResultView, SEARCHING_PLACEHOLDER};

/// Formats result region states for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a result region state in the given output format
    pub fn format(view: &ResultView, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => view.markup(),
            OutputFormat::Text => Self::format_text(view),
        }
    }

    /// Plain-text rendering, with the placeholder dimmed and the banner in red
    pub fn format_text(view: &ResultView) -> String {
        match view {
            ResultView::Pending => SEARCHING_PLACEHOLDER.dimmed().to_string(),
            ResultView::Success(result) => result.pretty(),
            ResultView::Error { message } => {
                format!("{}\n{}", ERROR_BANNER.red().bold(), message)
            }
        }
    }

    /// Blocking notification shown in place of a browser alert
    pub fn format_alert(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.yellow())
    }
}
