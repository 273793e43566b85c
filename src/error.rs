use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to write output: {path}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_a_directory() {
        let err = SummaryError::NotADirectory("/path/to/file".to_string());
        assert_eq!(err.to_string(), "Path is not a directory: /path/to/file");
    }

    #[test]
    fn test_error_display_write_output() {
        let err = SummaryError::WriteOutput {
            path: "/out/summary.md".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write output: /out/summary.md");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err: SummaryError = io_err.into();
        assert!(err.to_string().contains("Server error"));
    }
}
