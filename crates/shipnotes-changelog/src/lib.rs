//! Shipnotes Changelog - Release notes extraction
//!
//! This crate slices the section for one version out of a changelog and
//! optionally appends a comparison link against the previous release tag.

pub mod diff_link;
pub mod extract;
pub mod release_notes;

pub use diff_link::{full_changelog_line, previous_tag, DiffUrlTemplate};
pub use extract::{extract_section, SectionExtractor, VersionSection};
pub use release_notes::{ReleaseNotes, ReleaseNotesBuilder};
