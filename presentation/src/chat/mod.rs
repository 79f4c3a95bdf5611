//! Interactive query module
//!
//! Provides a line-editor based loop where every entered line is one
//! activation of the submit control.

mod repl;

pub use repl::QueryRepl;
