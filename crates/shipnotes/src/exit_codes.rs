//! Exit codes for the CLI

use shipnotes_core::error::{ChangelogError, ConfigError, GitError, QualityError, ShipnotesError};

/// Success
pub const SUCCESS: u8 = 0;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Git error
pub const GIT_ERROR: u8 = 3;

/// Requested version has no changelog section
pub const VERSION_ERROR: u8 = 4;

/// Malformed typo record
pub const VALIDATION_ERROR: u8 = 5;

/// Pick the exit code for the first recognized error in the chain
pub fn for_error(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ShipnotesError>() {
            match e {
                ShipnotesError::Config(_) => return CONFIG_ERROR,
                ShipnotesError::Git(_) => return GIT_ERROR,
                ShipnotesError::Changelog(e) => return changelog_code(e),
                ShipnotesError::Quality(e) => return quality_code(e),
            }
        } else if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        } else if cause.is::<GitError>() {
            return GIT_ERROR;
        } else if let Some(e) = cause.downcast_ref::<ChangelogError>() {
            return changelog_code(e);
        } else if let Some(e) = cause.downcast_ref::<QualityError>() {
            return quality_code(e);
        }
    }
    ERROR
}

fn changelog_code(err: &ChangelogError) -> u8 {
    match err {
        ChangelogError::VersionNotFound(_) => VERSION_ERROR,
        _ => ERROR,
    }
}

fn quality_code(err: &QualityError) -> u8 {
    match err {
        QualityError::InvalidRecord { .. } => VALIDATION_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_version_not_found() {
        let err: anyhow::Error =
            ShipnotesError::from(ChangelogError::VersionNotFound("1.0.0".to_string())).into();
        assert_eq!(for_error(&err), VERSION_ERROR);
    }

    #[test]
    fn test_missing_changelog_is_general_error() {
        let err: anyhow::Error =
            ShipnotesError::from(ChangelogError::FileNotFound(PathBuf::from("CHANGELOG.md")))
                .into();
        assert_eq!(for_error(&err), ERROR);
    }

    #[test]
    fn test_git_failure() {
        let err: anyhow::Error = ShipnotesError::from(GitError::CommandFailed {
            command: "git tag".to_string(),
            status: "exit status: 128".to_string(),
            stderr: String::new(),
        })
        .into();
        assert_eq!(for_error(&err), GIT_ERROR);
    }

    #[test]
    fn test_bare_config_error_with_context() {
        let err = anyhow::Error::new(ConfigError::InvalidValue {
            field: "diff_url".to_string(),
            message: "must contain {old} placeholder".to_string(),
        })
        .context("Invalid --diff-url");
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_invalid_record() {
        let source = serde_json::from_str::<u64>("\"x\"").unwrap_err();
        let err = anyhow::Error::new(QualityError::InvalidRecord { line: 3, source });
        assert_eq!(for_error(&err), VALIDATION_ERROR);
    }

    #[test]
    fn test_unknown_error() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
    }
}
