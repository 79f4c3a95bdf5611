//! Result region states

use super::messages::{ERROR_BANNER, SEARCHING_PLACEHOLDER};
use crate::query::result::QueryResult;

/// Content of the result region.
///
/// The region is always in exactly one of these states. Every render replaces
/// the whole content, so nothing from a previous state survives.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Request in flight
    Pending,
    /// Server answered with a JSON value
    Success(QueryResult),
    /// Any failure after validation
    Error { message: String },
}

impl ResultView {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// HTML fragment for hosts that render markup.
    ///
    /// `Pending` is a paragraph, `Success` a `<pre>` block with the
    /// pretty-printed JSON, `Error` the banner paragraph followed by the
    /// message paragraph. Text content is escaped.
    pub fn markup(&self) -> String {
        match self {
            Self::Pending => format!("<p>{}</p>", escape_html(SEARCHING_PLACEHOLDER)),
            Self::Success(result) => format!("<pre>{}</pre>", escape_html(&result.pretty())),
            Self::Error { message } => format!(
                "<p>{}</p><p>{}</p>",
                escape_html(ERROR_BANNER),
                escape_html(message)
            ),
        }
    }

    /// Plain text for terminal hosts
    pub fn text(&self) -> String {
        match self {
            Self::Pending => SEARCHING_PLACEHOLDER.to_string(),
            Self::Success(result) => result.pretty(),
            Self::Error { message } => format!("{}\n{}", ERROR_BANNER, message),
        }
    }
}

/// Escape the characters that would otherwise be parsed as markup.
///
/// Quotes are left alone: the output is only ever used as element text.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
