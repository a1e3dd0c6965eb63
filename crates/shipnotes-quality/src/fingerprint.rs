//! Issue fingerprints
//!
//! GitLab deduplicates code quality findings across pipelines by
//! fingerprint, so the value must only depend on what identifies a typo:
//! its file, its byte offset and the misspelled token.

use md5::{Digest, Md5};

use crate::types::CHECK_NAME;

/// MD5 of `typos::<path>::<byte_offset>::<typo>`, as 32 lowercase hex digits
pub fn fingerprint(path: &str, byte_offset: u64, typo: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(CHECK_NAME.as_bytes());
    hasher.update(b"::");
    hasher.update(path.as_bytes());
    hasher.update(b"::");
    hasher.update(byte_offset.to_string().as_bytes());
    hasher.update(b"::");
    hasher.update(typo.as_bytes());
    format!("{:x}", hasher.finalize())
}
