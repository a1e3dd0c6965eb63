//! Shipnotes Quality - typos to GitLab Code Quality conversion
//!
//! `typos --format json` prints one JSON object per line. Records of type
//! `typo` become entries of a GitLab Code Quality report; every other line
//! is ignored.

pub mod convert;
pub mod fingerprint;
pub mod types;

pub use convert::{convert_reader, parse_issue, TypoReportConverter};
pub use fingerprint::fingerprint;
pub use types::{CodeQualityIssue, IssueLines, IssueLocation, Severity, TypoRecord};
