//! Shipnotes Core - Shared foundation for the shipnotes release tools
//!
//! This crate provides the error taxonomy and configuration loading used by
//! the changelog extractor and the code quality report converter.

pub mod config;
pub mod error;

pub use config::{Config, GitBackend, GitConfig, ReleaseNotesConfig};
pub use error::{ChangelogError, ConfigError, GitError, QualityError, Result, ShipnotesError};
