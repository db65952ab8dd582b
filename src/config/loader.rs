//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::WikiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read and deserialize a TOML file, without semantic checks.
pub fn read_config(path: &Path) -> Result<WikiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: file (or defaults), then `overrides`,
/// then one validation pass over the merged result.
pub fn load_config<F>(path: Option<&Path>, overrides: F) -> Result<WikiConfig, ConfigError>
where
    F: FnOnce(&mut WikiConfig),
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => WikiConfig::default(),
    };
    overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
