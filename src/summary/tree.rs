//! Directory-structure rendering.

use crate::discovery::FileRecord;
use std::collections::BTreeMap;

#[derive(Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: Vec<FileLeaf>,
}

struct FileLeaf {
    name: String,
    has_content: bool,
}

/// Render the record sequence as a nested markdown bullet list.
///
/// Directories sort before files at each level, both alphabetically. With
/// `show_content_status`, content-less files are suffixed.
pub fn render_directory_structure(files: &[FileRecord], show_content_status: bool) -> String {
    let mut root = DirNode::default();

    for file in files {
        let mut node = &mut root;
        let mut parts = file.path.split('/').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                node.files.push(FileLeaf {
                    name: part.to_string(),
                    has_content: file.has_content,
                });
            } else {
                node = node.dirs.entry(part.to_string()).or_default();
            }
        }
    }

    let mut out = String::new();
    render(&root, 0, show_content_status, &mut out);
    out
}

fn render(node: &DirNode, level: usize, show_content_status: bool, out: &mut String) {
    let indent = "  ".repeat(level);

    for (name, child) in &node.dirs {
        out.push_str(&format!("{indent}- {name}/\n"));
        render(child, level + 1, show_content_status, out);
    }

    let mut files: Vec<&FileLeaf> = node.files.iter().collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));
    for file in files {
        let suffix = if show_content_status && !file.has_content {
            " (content not included)"
        } else {
            ""
        };
        out.push_str(&format!("{indent}- {}{suffix}\n", file.name));
    }
}
