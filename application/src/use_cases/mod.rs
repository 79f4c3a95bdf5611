//! Use cases (application services)

pub mod submit_query;
