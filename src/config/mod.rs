//! Configuration module for Sumi-Reach
//!
//! Configuration comes from an optional TOML file with command-line values
//! layered on top.
//!
//! # Example
//!
//! ```no_run
//! use sumi_reach::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("reach.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ConfigOverrides, CrawlerConfig, OutputConfig, OutputFormat, UserAgentConfig,
    DEFAULT_MAX_DEPTH, DEFAULT_SEED,
};

// Re-export parser functions
pub use parser::{load_config, resolve_config};
pub use validation::validate;
