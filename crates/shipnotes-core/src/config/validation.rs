//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::defaults::{NEW_PLACEHOLDER, OLD_PLACEHOLDER};
use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_release_notes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_release_notes(config: &Config) -> Result<()> {
    if config.release_notes.changelog.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "release_notes.changelog".to_string(),
            message: "changelog path cannot be empty".to_string(),
        }
        .into());
    }

    if config.release_notes.heading.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "release_notes.heading".to_string(),
            message: "heading cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(template) = config.release_notes.diff_url_template() {
        validate_diff_url(template).map_err(|message| ConfigError::InvalidValue {
            field: "release_notes.diff_url".to_string(),
            message,
        })?;
    }

    Ok(())
}

/// Check that a compare URL template carries both placeholders
pub fn validate_diff_url(template: &str) -> std::result::Result<(), String> {
    let missing: Vec<&str> = [OLD_PLACEHOLDER, NEW_PLACEHOLDER]
        .into_iter()
        .filter(|p| !template.contains(p))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("must contain {} placeholder", missing.join(" and ")))
    }
}
