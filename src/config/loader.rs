//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RequestLoggerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RequestLoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML content.
pub fn parse_config(content: &str) -> Result<RequestLoggerConfig, ConfigError> {
    let config: RequestLoggerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Semantic validation (serde handles syntactic).
///
/// Returns all validation errors, not just the first.
pub fn validate_config(config: &RequestLoggerConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(skip) = &config.skip {
        if skip.is_empty() {
            errors.push("skip rule must not be empty".to_string());
        } else if !skip.starts_with('/') {
            errors.push(format!("skip rule \"{}\" must be an absolute path", skip));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
