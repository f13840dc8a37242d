//! Sumi-Reach: a depth-bounded, domain-scoped concurrent site crawler
//!
//! Starting from a single seed address, this crate fetches pages, records
//! each page's title, splits its outgoing links into in-domain and
//! out-of-domain lists, and recursively follows the in-domain ones until a
//! depth budget is exhausted. Every URL is fetched at most once.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Reach operations
///
/// Note that a crawl itself never fails: individual fetch failures are
/// absorbed by the task that hit them. These errors come from setup
/// (configuration, HTTP client) and from writing the final report.
#[derive(Debug, Error)]
pub enum ReachError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to retrieve a document
///
/// Reads as "not found" to the user; the transport cause is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not found: {url} ({message})")]
pub struct FetchError {
    pub url: String,
    pub message: String,
}

impl FetchError {
    pub fn new(url: impl Into<String>, message: impl ToString) -> Self {
        Self {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while rendering or writing the crawl report
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Sumi-Reach operations
pub type Result<T> = std::result::Result<T, ReachError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for a single fetch
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, Crawler};
pub use state::{Page, Site, VisitState};
pub use crate::url::{is_in_domain, resolve_in_domain};
