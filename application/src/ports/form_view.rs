//! Form view port
//!
//! The host UI exposes three elements to the controller: the submit
//! control, the question input and the result region.

use query_form_domain::ResultView;
use std::sync::Arc;

/// The question input and result region of a form.
///
/// Implementations live in the presentation layer (terminal, web view, ...).
pub trait QueryFormView: Send + Sync {
    /// Current value of the question input
    fn question(&self) -> String;

    /// Show a blocking notification to the user
    fn alert(&self, message: &str);

    /// Replace the content of the result region
    fn render(&self, view: &ResultView);
}

/// The UI environment that owns the form elements.
///
/// A host is asked for its elements once, after its UI tree is built.
pub trait FormHost {
    type View: QueryFormView + 'static;

    /// Whether the submit control exists
    fn has_submit_control(&self) -> bool;

    /// The question input and result region
    fn view(&self) -> Arc<Self::View>;
}
