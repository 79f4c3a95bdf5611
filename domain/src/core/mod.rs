//! Core domain concepts.
//!
//! - [`question::Question`] — the validated question sent to the API
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
