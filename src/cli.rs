use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mds",
    version,
    about = "Generate codebase summaries for LLM development",
    after_help = "Examples:
  $ mds                                  # Summarize current directory
  $ mds -p \"src/**/*.rs,src/**/*.toml\"   # Attach content for matching files only
  $ mds -o summary.md                    # Save to a specific file
  $ mds --structure                      # Output only the directory structure
  $ mds --serve -P 8080                  # Serve summaries over HTTP
  $ mds ../other-project                 # Summarize another directory"
)]
pub struct Cli {
    /// Project path (defaults to current directory)
    pub path: Option<PathBuf>,

    /// File patterns to include content for (comma-separated)
    #[arg(short, long)]
    pub patterns: Option<String>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output only the directory structure
    #[arg(long)]
    pub structure: bool,

    /// Start the HTTP server instead of writing a file
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP server
    #[arg(short = 'P', long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["mds"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.patterns.is_none());
        assert!(!cli.structure);
        assert!(!cli.serve);
    }

    #[test]
    fn test_parse_path() {
        let cli = Cli::try_parse_from(["mds", "../other-project"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("../other-project")));
    }

    #[test]
    fn test_parse_patterns() {
        let cli = Cli::try_parse_from(["mds", "-p", "src/**/*.rs,docs/**"]).unwrap();
        assert_eq!(cli.patterns.as_deref(), Some("src/**/*.rs,docs/**"));
    }

    #[test]
    fn test_parse_output() {
        let cli = Cli::try_parse_from(["mds", "--output", "summary.md"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("summary.md")));
    }

    #[test]
    fn test_parse_structure() {
        let cli = Cli::try_parse_from(["mds", "--structure"]).unwrap();
        assert!(cli.structure);
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["mds", "--serve", "-P", "8080"]).unwrap();
        assert!(cli.serve);
        assert_eq!(cli.port, Some(8080));
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "mds",
            "-p",
            "src/**/*.rs",
            "-o",
            "out.md",
            "--structure",
            "./project",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("./project")));
        assert!(cli.patterns.is_some());
        assert!(cli.output.is_some());
        assert!(cli.structure);
    }
}
