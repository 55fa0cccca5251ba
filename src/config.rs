//! Configuration management for the dashboard client

use crate::error::{DashboardError, Result};

/// Hostnames that mean "page served by a local dev server"
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

/// Backend used during local development
pub const DEFAULT_LOCAL_API_URL: &str = "http://127.0.0.1:5000";

/// Deployed backend
pub const DEFAULT_PRODUCTION_API_URL: &str = "https://davaobuildai.onrender.com";

/// Dashboard client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, development)
    pub environment: String,

    /// Log level
    pub log_level: log::Level,

    /// Base URL of the pricing API, without trailing slash
    pub api_base_url: String,

    /// Material used when the selector has no value yet
    pub default_material: String,

    /// How long toast notifications stay visible
    pub toast_duration_ms: u32,
}

impl Config {
    /// Resolve configuration for a page served from `hostname`.
    ///
    /// `lookup` provides optional overrides by key; in the browser these come
    /// from `<meta>` tags. An explicit `API_BASE_URL` wins over hostname
    /// detection.
    pub fn from_source<F>(hostname: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_local = LOCAL_HOSTNAMES.contains(&hostname);

        let api_base_url = match lookup("API_BASE_URL") {
            Some(url) => url,
            None if is_local => {
                lookup("LOCAL_API_URL").unwrap_or_else(|| DEFAULT_LOCAL_API_URL.to_string())
            }
            None => lookup("PRODUCTION_API_URL")
                .unwrap_or_else(|| DEFAULT_PRODUCTION_API_URL.to_string()),
        };

        let default_log_level = if is_local { log::Level::Debug } else { log::Level::Info };

        let config = Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| {
                if is_local { "development" } else { "production" }.to_string()
            }),

            log_level: lookup("LOG_LEVEL")
                .map(|v| v.parse().unwrap_or(default_log_level))
                .unwrap_or(default_log_level),

            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),

            default_material: lookup("DEFAULT_MATERIAL")
                .unwrap_or_else(|| "cement".to_string()),

            toast_duration_ms: lookup("TOAST_DURATION_MS")
                .map(|v| v.parse().unwrap_or(3000))
                .unwrap_or(3000),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(DashboardError::Config("api_base_url must not be empty".into()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(DashboardError::Config(format!(
                "api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }
        if self.default_material.trim().is_empty() {
            return Err(DashboardError::Config("default_material must not be empty".into()));
        }
        Ok(())
    }
}
