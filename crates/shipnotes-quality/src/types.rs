//! Typos records and GitLab Code Quality issues

use serde::{Deserialize, Serialize};

use crate::fingerprint::fingerprint;

/// Check name reported for every typo
pub const CHECK_NAME: &str = "typos";

/// Record type emitted by typos for a misspelling
pub const TYPO_RECORD_TYPE: &str = "typo";

/// A `"type": "typo"` line from `typos --format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoRecord {
    /// Byte position of the typo in its file
    pub byte_offset: u64,
    /// The misspelled token
    pub typo: String,
    /// Suggested replacements, best first
    pub corrections: Vec<String>,
    /// File containing the typo
    pub path: String,
    /// Line number; absent for typos found in file names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_num: Option<u64>,
}

impl TypoRecord {
    /// Line the typo is reported on, defaulting to the first line
    pub fn line(&self) -> u64 {
        self.line_num.unwrap_or(1)
    }

    /// Human-readable description, e.g. ``typo: `teh` should be `the` ``
    pub fn description(&self) -> String {
        let corrections: Vec<String> = self
            .corrections
            .iter()
            .map(|c| format!("`{c}`"))
            .collect();
        format!("typo: `{}` should be {}", self.typo, corrections.join(", "))
    }

    /// Stable identifier of this typo across runs
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.path, self.byte_offset, &self.typo)
    }
}

/// Severity of a code quality violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

/// One entry of a GitLab Code Quality report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeQualityIssue {
    /// Human-readable description of the violation
    pub description: String,
    /// Rule that produced the violation
    pub check_name: String,
    /// Stable hash identifying the violation
    pub fingerprint: String,
    /// Severity of the violation
    pub severity: Severity,
    /// Where the violation occurred
    pub location: IssueLocation,
}

/// File and line of a code quality violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLocation {
    /// File path, as reported by typos
    pub path: String,
    /// Line range
    pub lines: IssueLines,
}

/// Line range of a code quality violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLines {
    /// First line of the violation
    pub begin: u64,
}

impl From<&TypoRecord> for CodeQualityIssue {
    fn from(record: &TypoRecord) -> Self {
        Self {
            description: record.description(),
            check_name: CHECK_NAME.to_string(),
            fingerprint: record.fingerprint(),
            severity: Severity::Minor,
            location: IssueLocation {
                path: record.path.clone(),
                lines: IssueLines {
                    begin: record.line(),
                },
            },
        }
    }
}
