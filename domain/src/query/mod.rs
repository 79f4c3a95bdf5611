//! The request/response pair exchanged with `/api/query`.

pub mod request;
pub mod result;
