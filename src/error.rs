//! Error types for the dashboard client
//!
//! Uses thiserror for ergonomic error definitions.
//! Every flow reports through this one enum; callers decide whether to
//! surface an error to the user or only log it.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request never produced a response (connection refused, CORS, offline)
    #[error("Network error: {0}")]
    Network(String),

    /// API answered with a non-success status
    #[error("API error: HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the JSON we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Chart backend failures
    #[error("Chart error: {0}")]
    Chart(String),

    /// Missing or mistyped DOM elements
    #[error("DOM error: {0}")]
    Dom(String),
}

impl DashboardError {
    /// True for failures that happened before any response was received
    pub fn is_network(&self) -> bool {
        matches!(self, DashboardError::Network(_))
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Network(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Dom(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<DashboardError> for wasm_bindgen::JsValue {
    fn from(err: DashboardError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
