//! Output formatting for the result region

pub mod console;
