//! Configuration handling for the TUI

use crate::feed::{DEFAULT_API_BASE, PLACEHOLDER_IMAGE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the content host
pub const API_BASE_ENV: &str = "FORMFEED_API_BASE";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Base URL of the WordPress site
    pub api_base: Option<String>,
    /// Image path shown for posts without featured media
    pub placeholder_image: Option<String>,
    /// Request timeout for the feed fetch
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formfeed", "formfeed-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(base) = std::env::var(API_BASE_ENV) {
            config.api_base = Some(base);
        }

        Ok(config)
    }

    pub fn api_base(&self) -> &str {
        self.api_base
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
    }

    pub fn placeholder_image(&self) -> &str {
        self.placeholder_image
            .as_deref()
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
