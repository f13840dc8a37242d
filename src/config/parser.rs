use crate::config::types::{Config, ConfigOverrides};
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sumi_reach::config::load_config;
///
/// let config = load_config(Path::new("reach.toml")).unwrap();
/// println!("Max depth: {}", config.crawler.max_depth);
/// ```
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    resolve_config(Some(path), ConfigOverrides::default())
}

/// Builds the effective configuration for a run
///
/// Starts from the file at `path` when given, otherwise from defaults, then
/// applies the command-line overrides and validates the result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> ConfigResult<Config> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => Config::default(),
    };

    config.apply_overrides(overrides);
    validate(&config)?;
    Ok(config)
}
