//! Progress display while a request is pending

pub mod reporter;
