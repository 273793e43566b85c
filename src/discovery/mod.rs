//! File discovery: traversal, content classification, and pattern matching.
//!
//! Two pattern languages live here on purpose. The ignore rules
//! ([`crate::ignore`]) prune paths from the output entirely and speak the
//! full gitignore dialect; the content-inclusion globs ([`patterns`]) only
//! decide whether a listed file's bytes are attached.

pub mod content;
pub mod patterns;
pub mod walker;

pub use patterns::{matches_any, split_patterns};
pub use walker::{FileRecord, FileWalker};
