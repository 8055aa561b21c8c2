// src/api/mod.rs
//! HTTP client for the remote RAG service.
//!
//! Two calls: `ask` (POST to the query endpoint) and `probe_health` (GET on
//! the service root). Neither returns an error to the caller.

mod ask;
mod probe_health;
mod query_error;
mod types;

use std::time::Duration;
use reqwest::Url;

use crate::config::ApiConfig;
use crate::error::{ChatError, Result};

pub use types::{ApiHealth, DepthOutOfRange, QueryRequest, QueryResult, ReasoningDepth};

#[derive(Debug, Clone)]
pub struct RagClient {
    client: reqwest::Client,
    root_url: Url,
    query_url: Url,
    query_timeout: Duration,
    health_timeout: Duration,
}

impl RagClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // Url::join replaces the last segment unless the base ends in '/'
        let base = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };

        let root_url = Url::parse(&base)
            .map_err(|e| ChatError::Config(format!("invalid base url '{}': {e}", config.base_url)))?;
        let query_url = root_url
            .join(config.query_path.trim_start_matches('/'))
            .map_err(|e| ChatError::Config(format!("invalid query path '{}': {e}", config.query_path)))?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            root_url,
            query_url,
            query_timeout: config.query_timeout(),
            health_timeout: config.health_timeout(),
        })
    }

    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_query_url_joins_under_base_path() {
        let client = RagClient::new(&api("https://host.example/rag")).unwrap();
        assert_eq!(client.root_url().as_str(), "https://host.example/rag/");
        assert_eq!(client.query_url().as_str(), "https://host.example/rag/query");
    }

    #[test]
    fn test_leading_slash_in_query_path_is_relative() {
        let config = ApiConfig {
            query_path: "/v1/query".to_string(),
            ..api("http://localhost:8000")
        };
        let client = RagClient::new(&config).unwrap();
        assert_eq!(client.query_url().as_str(), "http://localhost:8000/v1/query");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(RagClient::new(&api("::nope")), Err(ChatError::Config(_))));
    }
}
