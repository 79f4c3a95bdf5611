//! Result region content and the fixed strings shown to the user.

pub mod messages;
pub mod result_view;
