//! Client configuration.

use crate::error::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the API (e.g. `http://localhost:8080`), without the `/api` prefix.
    pub base_url: String,
    /// Upper bound for any single HTTP request, in milliseconds.
    pub request_timeout_ms: u64,
    /// Upper bound for each order write issued by a reconciliation, in milliseconds.
    pub write_timeout_ms: u64,
    /// Page size for the project listing.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 30_000,
            write_timeout_ms: 10_000,
            page_size: 10,
        }
    }
}

impl ApiConfig {
    /// Configuration pointed at `base_url` with default bounds.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    /// Rejects settings the client cannot work with.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConsoleError::Config("base_url must not be empty".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConsoleError::Config(format!(
                "base_url must be an http(s) URL, got {}",
                self.base_url
            )));
        }
        if self.write_timeout_ms == 0 || self.request_timeout_ms == 0 {
            return Err(ConsoleError::Config("timeouts must be positive".into()));
        }
        if self.page_size == 0 {
            return Err(ConsoleError::Config("page_size must be positive".into()));
        }
        Ok(())
    }
}
