//! File content reading and binary/text classification.

use encoding_rs::SHIFT_JIS;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Number of leading bytes inspected by the binary heuristic.
const BINARY_SNIFF_LEN: usize = 1024;

fn is_binary(buf: &[u8]) -> bool {
    buf.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Read a file as text, or `None` for binary and unreadable files.
///
/// Decoding tries UTF-8 first with a single Shift-JIS fallback for legacy
/// text files. Read and decode failures are logged, never propagated.
pub fn read_file_content(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read file");
            return None;
        }
    };

    if is_binary(&bytes) {
        debug!(path = %path.display(), "Binary file, content omitted");
        return None;
    }

    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            let (decoded, _, had_errors) = SHIFT_JIS.decode(e.as_bytes());
            if had_errors {
                warn!(path = %path.display(), "File is neither UTF-8 nor Shift-JIS");
                None
            } else {
                Some(decoded.into_owned())
            }
        }
    }
}
