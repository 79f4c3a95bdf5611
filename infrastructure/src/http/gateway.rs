//! reqwest implementation of the QueryGateway port

use crate::config::FileHttpConfig;
use async_trait::async_trait;
use query_form_application::ports::query_gateway::{QueryError, QueryGateway};
use query_form_domain::{QueryRequest, QueryResult};
use reqwest::{Client, Proxy, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while building the gateway (bad URL, bad proxy, ...)
#[derive(Error, Debug)]
pub enum GatewayBuildError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid proxy '{proxy}': {reason}")]
    InvalidProxy { proxy: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Gateway that POSTs the question as JSON to the query endpoint
pub struct HttpQueryGateway {
    client: Client,
    url: Url,
    timeout: Option<Duration>,
}

impl HttpQueryGateway {
    /// Create a gateway for `endpoint` resolved against `base_url`.
    ///
    /// An absolute endpoint path replaces any path on the base URL, the same
    /// way a page-relative `/api/query` resolves against the page origin.
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self, GatewayBuildError> {
        Self::with_options(base_url, endpoint, None, None)
    }

    /// Create a gateway from the `[http]` config section
    pub fn from_config(config: &FileHttpConfig) -> Result<Self, GatewayBuildError> {
        Self::with_options(
            &config.base_url,
            &config.endpoint,
            config.timeout_seconds.map(Duration::from_secs),
            config.proxy.as_deref(),
        )
    }

    /// The resolved endpoint URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Create a gateway with an optional per-request timeout and proxy
    pub fn with_options(
        base_url: &str,
        endpoint: &str,
        timeout: Option<Duration>,
        proxy: Option<&str>,
    ) -> Result<Self, GatewayBuildError> {
        let invalid = |reason: String| GatewayBuildError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(base_url)
            .and_then(|base| base.join(endpoint))
            .map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let client = Self::client(timeout, proxy)?;
        info!("Query endpoint: {}", url);

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    fn client(timeout: Option<Duration>, proxy: Option<&str>) -> Result<Client, GatewayBuildError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = proxy {
            let proxy = Proxy::all(proxy).map_err(|e| GatewayBuildError::InvalidProxy {
                proxy: proxy.to_string(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .map_err(|e| GatewayBuildError::Client(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> QueryError {
        match self.timeout {
            Some(timeout) if e.is_timeout() => QueryError::Transport(format!(
                "no response from {} within {}s",
                self.url,
                timeout.as_secs_f64()
            )),
            _ => QueryError::Transport(e.to_string()),
        }
    }
}

#[async_trait]
impl QueryGateway for HttpQueryGateway {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResult, QueryError> {
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("Response received: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| self.transport_error(e))?;
            return Err(QueryError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        QueryResult::from_slice(&body).map_err(|e| QueryError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolves_against_base() {
        let gateway = HttpQueryGateway::new("http://127.0.0.1:8000", "/api/query").unwrap();
        assert_eq!(gateway.url().as_str(), "http://127.0.0.1:8000/api/query");
    }

    #[test]
    fn test_absolute_endpoint_replaces_base_path() {
        let gateway = HttpQueryGateway::new("https://example.com/static/index.html", "/api/query")
            .unwrap();
        assert_eq!(gateway.url().as_str(), "https://example.com/api/query");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpQueryGateway::new("not a url", "/api/query").err().unwrap();
        assert!(matches!(err, GatewayBuildError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = HttpQueryGateway::new("ftp://example.com", "/api/query")
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_from_config_with_proxy_and_timeout() {
        let config = FileHttpConfig {
            timeout_seconds: Some(15),
            proxy: Some("http://proxy.local:3128".to_string()),
            ..Default::default()
        };
        let gateway = HttpQueryGateway::from_config(&config).unwrap();
        assert_eq!(gateway.timeout, Some(Duration::from_secs(15)));
        assert_eq!(gateway.url().path(), "/api/query");
    }
}
