//! Directory traversal producing the file record sequence.

use crate::discovery::{content, patterns};
use crate::error::Result;
use crate::ignore::IgnoreRules;
use serde::Serialize;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// One entry of the traversal output.
///
/// `content` is attached iff `has_content` is true; binary files, unreadable
/// files, and files excluded by the content-inclusion patterns are listed
/// without content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Root-relative path, `/`-separated on every platform.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub has_content: bool,
}

/// Sequential depth-first walker over a project tree.
pub struct FileWalker<'a> {
    ignore: &'a IgnoreRules,
}

impl<'a> FileWalker<'a> {
    pub fn new(ignore: &'a IgnoreRules) -> Self {
        Self { ignore }
    }

    /// Walk `start_dir` and collect a record per surviving file.
    ///
    /// Paths are made relative to `project_root`. Directories matched by the
    /// ignore rules are pruned whole, so no negation rule can re-include
    /// anything beneath them. With no `patterns`, every text file gets its
    /// content; with patterns, only matching paths are read at all.
    ///
    /// A failed directory listing aborts the walk; a failed file read only
    /// clears that record's content.
    pub fn find_all_files(
        &self,
        start_dir: &Path,
        project_root: &Path,
        patterns: Option<&[String]>,
    ) -> Result<Vec<FileRecord>> {
        let mut records = Vec::new();

        let walker = WalkDir::new(start_dir)
            .into_iter()
            .filter_entry(|entry| self.keep(entry, project_root));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = relative_path(entry.path(), project_root);
            let include_content =
                patterns.is_none_or(|pats| patterns::matches_any(&path, pats));

            let record = if include_content {
                match content::read_file_content(entry.path()) {
                    Some(text) => FileRecord {
                        path,
                        content: Some(text),
                        has_content: true,
                    },
                    None => FileRecord {
                        path,
                        content: None,
                        has_content: false,
                    },
                }
            } else {
                FileRecord {
                    path,
                    content: None,
                    has_content: false,
                }
            };

            records.push(record);
        }

        Ok(records)
    }

    fn keep(&self, entry: &DirEntry, project_root: &Path) -> bool {
        // The walk root itself is never matched against the rules.
        if entry.depth() == 0 {
            return true;
        }
        let relative = relative_path(entry.path(), project_root);
        !self
            .ignore
            .should_ignore(&relative, entry.file_type().is_dir())
    }
}

/// Root-relative path with `/` separators regardless of host convention.
fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
