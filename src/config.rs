// src/config.rs
//! YAML configuration for the chat client.
//!
//! Every field has a default, so an empty file (or no file at all) gives a
//! working client pointed at a local API.

use std::path::Path;
use std::time::Duration;
use serde::Deserialize;

use crate::api::ReasoningDepth;
use crate::error::{ChatError, Result};
use crate::log_info;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub api: ApiConfig,
    pub chat: ChatDisplayConfig,
    pub log_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root. The health probe hits this URL directly.
    pub base_url: String,
    /// Query endpoint, relative to `base_url`
    pub query_path: String,
    pub query_timeout_secs: u64,
    pub health_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            query_path: "query".to_string(),
            query_timeout_secs: 60,
            health_timeout_secs: 2,
        }
    }
}

impl ApiConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatDisplayConfig {
    pub title: String,
    pub sidebar_title: String,
    pub caption: String,
    pub greeting: String,
    pub disclaimer: String,
    pub contact: Vec<String>,
    pub default_depth: u8,
}

impl Default for ChatDisplayConfig {
    fn default() -> Self {
        Self {
            title: "💬 Chat with the Knowledge Base".to_string(),
            sidebar_title: "📚 Assistant Portal".to_string(),
            caption: "This assistant uses a RAG (Retrieval-Augmented Generation) system \
                      to answer from the indexed documents."
                .to_string(),
            greeting: "Hello! I am a virtual assistant backed by the indexed documents. \
                       How can I help you today?"
                .to_string(),
            disclaimer: "⚠️ Disclaimer: like any generative AI, this assistant may not \
                         provide 100% correct answers. Please verify critical information."
                .to_string(),
            contact: Vec::new(),
            default_depth: ReasoningDepth::DEFAULT,
        }
    }
}

impl ChatConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log_info!("No config at {}, using defaults", path.display());
            return Ok(Self::default().with_default_log_dir());
        }

        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)?;
        log_info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ChatConfig = serde_yaml::from_str(yaml)?;
        let config = config.with_default_log_dir();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .map_err(|e| ChatError::Config(format!("invalid api.base_url '{}': {e}", self.api.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ChatError::Config(format!(
                "api.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.api.query_timeout_secs == 0 || self.api.health_timeout_secs == 0 {
            return Err(ChatError::Config("timeouts must be at least one second".to_string()));
        }

        ReasoningDepth::new(self.chat.default_depth)
            .map_err(|e| ChatError::Config(format!("chat.default_depth: {e}")))?;

        Ok(())
    }

    pub fn default_depth(&self) -> ReasoningDepth {
        ReasoningDepth::new(self.chat.default_depth).unwrap_or_default()
    }

    fn with_default_log_dir(mut self) -> Self {
        if self.log_dir.is_empty() {
            self.log_dir = "./logs".to_string();
        }
        self
    }
}
