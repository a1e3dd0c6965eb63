//! Shipnotes Git - Tag queries for release tooling
//!
//! This crate answers one question for the release notes extractor: which
//! tags are reachable from a given tag, newest first. It can be answered by
//! spawning the `git` binary or in-process through libgit2.

mod cli;
mod lister;
mod repository;
mod tags;
pub mod types;

pub use cli::GitCli;
pub use lister::{tag_lister, TagLister};
pub use repository::{GitRepo, Result};
pub use types::TagInfo;
