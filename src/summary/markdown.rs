//! File-contents and path-list rendering.

use crate::discovery::FileRecord;
use std::path::Path;

/// Render the contents of every record that carries content, sorted by path,
/// as `###` sections with fenced code blocks.
pub fn render_file_contents(files: &[FileRecord]) -> String {
    let mut with_content: Vec<&FileRecord> = files
        .iter()
        .filter(|f| f.has_content && f.content.is_some())
        .collect();
    with_content.sort_by(|a, b| a.path.cmp(&b.path));

    let mut out = String::new();
    for file in with_content {
        if let Some(content) = &file.content {
            out.push_str(&format!("### {}\n```\n{}\n```\n\n", file.path, content));
        }
    }
    out
}

/// Render every record as an absolute-path bullet list, sorted by path.
pub fn render_path_list(project_root: &Path, files: &[FileRecord]) -> String {
    let mut sorted: Vec<&FileRecord> = files.iter().collect();
    sorted.sort_by(|a, b| a.path.cmp(&b.path));

    let mut out = String::from("# File Paths\n\n");
    for file in sorted {
        out.push_str(&format!("- `{}/{}`\n", project_root.display(), file.path));
    }
    out
}
