//! Line-by-line conversion of typos output

use std::io::BufRead;

use serde_json::Value;
use tracing::{info, instrument, trace};

use shipnotes_core::error::QualityError;

use crate::types::{CodeQualityIssue, TypoRecord, TYPO_RECORD_TYPE};

/// Parse one line of typos output.
///
/// Lines that are not JSON, and JSON records whose `type` is not `"typo"`,
/// yield `Ok(None)`. A typo record missing a required field is an error.
pub fn parse_issue(line: &[u8]) -> Result<Option<CodeQualityIssue>, serde_json::Error> {
    Ok(parse_record(line)?.map(|record| CodeQualityIssue::from(&record)))
}

/// Decode a typo record, skipping lines that are not typo records
fn parse_record(line: &[u8]) -> Result<Option<TypoRecord>, serde_json::Error> {
    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(e) => {
            trace!(error = %e, "skipping non-JSON line");
            return Ok(None);
        }
    };

    let record_type = value.get("type").and_then(Value::as_str);
    if record_type != Some(TYPO_RECORD_TYPE) {
        trace!(record_type = ?record_type, "skipping non-typo record");
        return Ok(None);
    }

    serde_json::from_value(value).map(Some)
}

/// Streams code quality issues out of typos output, one line at a time
pub struct TypoReportConverter<R> {
    reader: R,
    buf: Vec<u8>,
    lines: usize,
    skipped: usize,
}

impl<R: BufRead> TypoReportConverter<R> {
    /// Convert lines read from `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            lines: 0,
            skipped: 0,
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.lines
    }

    /// Number of lines ignored so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for TypoReportConverter<R> {
    type Item = Result<CodeQualityIssue, QualityError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.lines += 1,
                Err(e) => return Some(Err(QualityError::Io(e))),
            }

            match parse_issue(&self.buf) {
                Ok(Some(issue)) => return Some(Ok(issue)),
                Ok(None) => self.skipped += 1,
                Err(source) => {
                    return Some(Err(QualityError::InvalidRecord {
                        line: self.lines,
                        source,
                    }))
                }
            }
        }
    }
}

/// Convert a whole typos report, stopping at the first invalid typo record
#[instrument(skip(reader))]
pub fn convert_reader<R: BufRead>(reader: R) -> Result<Vec<CodeQualityIssue>, QualityError> {
    let mut converter = TypoReportConverter::new(reader);
    let issues = converter
        .by_ref()
        .collect::<Result<Vec<_>, QualityError>>()?;

    info!(
        lines = converter.lines_read(),
        issues = issues.len(),
        skipped = converter.skipped(),
        "converted typos report"
    );
    Ok(issues)
}
