//! Summary assembly: runs a traversal and renders the markdown document.

mod markdown;
mod tree;

use crate::discovery::{FileRecord, FileWalker};
use crate::error::{Result, SummaryError};
use crate::ignore::IgnoreRules;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use markdown::{render_file_contents, render_path_list};
pub use tree::render_directory_structure;

/// Options for one summary run.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub project_path: PathBuf,
    /// Content-inclusion globs; `None` attaches content for every text file.
    pub patterns: Option<Vec<String>>,
}

/// One traversal's records plus the rendered markdown document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub project_name: String,
    pub files: Vec<FileRecord>,
    pub markdown: String,
}

/// Drives the ignore rules and walker for one project root.
///
/// The ignore rules initialize against the first root a call sees; construct
/// a fresh summarizer per logical session rather than reusing one across
/// roots.
pub struct ProjectSummarizer {
    ignore: IgnoreRules,
}

impl ProjectSummarizer {
    pub fn new() -> Self {
        Self {
            ignore: IgnoreRules::new(),
        }
    }

    /// Full summary: directory structure plus file contents.
    pub fn summarize(&mut self, options: &SummaryOptions) -> Result<Summary> {
        let files = self.collect(&options.project_path, options.patterns.as_deref())?;
        let project_name = project_name(&options.project_path);

        let mut markdown = format!("# {project_name}\n\n## Directory Structure\n\n");
        markdown.push_str(&tree::render_directory_structure(&files, true));
        markdown.push_str("\n## File Contents\n\n");
        markdown.push_str(&markdown::render_file_contents(&files));

        Ok(Summary {
            project_name,
            files,
            markdown,
        })
    }

    /// Directory structure only, without reading any file contents.
    pub fn structure_only(&mut self, options: &SummaryOptions) -> Result<Summary> {
        let files = self.collect(&options.project_path, None)?;
        let project_name = project_name(&options.project_path);

        let mut markdown = format!("# {project_name}\n\n## Directory Structure\n\n");
        markdown.push_str(&tree::render_directory_structure(&files, false));

        Ok(Summary {
            project_name,
            files,
            markdown,
        })
    }

    fn collect(
        &mut self,
        project_path: &Path,
        patterns: Option<&[String]>,
    ) -> Result<Vec<FileRecord>> {
        if !project_path.is_dir() {
            return Err(SummaryError::NotADirectory(
                project_path.display().to_string(),
            ));
        }
        self.ignore.initialize(project_path);
        FileWalker::new(&self.ignore).find_all_files(project_path, project_path, patterns)
    }
}

impl Default for ProjectSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

fn project_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
