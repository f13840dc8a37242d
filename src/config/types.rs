use serde::Deserialize;
use std::path::PathBuf;

/// Seed used when neither the command line nor a config file names one
pub const DEFAULT_SEED: &str = "https://golang.org/";

/// Depth used when neither the command line nor a config file sets one
pub const DEFAULT_MAX_DEPTH: i32 = 3;

/// Main configuration structure for Sumi-Reach
///
/// Every section is optional in the TOML file; missing values fall back to
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Seed URL; also the prefix in-domain links are resolved against
    pub seed: String,

    /// Maximum number of hops from the seed; zero or less crawls nothing
    #[serde(rename = "max-depth")]
    pub max_depth: i32,

    /// Maximum number of fetches in flight at once (unbounded when absent)
    #[serde(rename = "max-concurrent-fetches")]
    pub max_concurrent_fetches: Option<usize>,

    /// Per-request deadline in seconds (none when absent)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_concurrent_fetches: None,
            request_timeout_secs: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SumiReach".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// File to write the report to (stdout when absent)
    pub path: Option<PathBuf>,
}

/// Final report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text listing of pages and registry entries
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Values given on the command line, applied on top of the file config
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<String>,
    pub max_depth: Option<i32>,
    pub max_concurrent_fetches: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Creates a default configuration crawling `seed` to `max_depth`
    pub fn for_seed(seed: impl Into<String>, max_depth: i32) -> Self {
        let mut config = Self::default();
        config.crawler.seed = seed.into();
        config.crawler.max_depth = max_depth;
        config
    }

    /// Replaces every value the overrides set
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(seed) = overrides.seed {
            self.crawler.seed = seed;
        }
        if let Some(depth) = overrides.max_depth {
            self.crawler.max_depth = depth;
        }
        if let Some(limit) = overrides.max_concurrent_fetches {
            self.crawler.max_concurrent_fetches = Some(limit);
        }
        if let Some(secs) = overrides.request_timeout_secs {
            self.crawler.request_timeout_secs = Some(secs);
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if let Some(path) = overrides.output_path {
            self.output.path = Some(path);
        }
    }
}
