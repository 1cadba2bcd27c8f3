use crate::cli::Args;
use anyhow::{Context, Result};
use folio_sync::ApiConfig;
use std::fs;
use std::path::Path;

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub write_timeout_ms: Option<u64>,
    pub page_size: Option<u32>,
}

impl From<&Args> for Overrides {
    fn from(args: &Args) -> Self {
        Self {
            base_url: args.base_url.clone(),
            write_timeout_ms: args.timeout_ms,
            page_size: args.page_size,
        }
    }
}

/// Reads the config file (defaults when absent), applies flag overrides and
/// validates the result.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<ApiConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        }
        None => ApiConfig::default(),
    };

    if let Some(base_url) = &overrides.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = overrides.write_timeout_ms {
        config.write_timeout_ms = timeout;
    }
    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
