//! HTTP adapter for the query API.

mod gateway;

pub use gateway::{GatewayBuildError, HttpQueryGateway};
