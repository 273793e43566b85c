//! CLI mode handlers.

use crate::cli::Cli;
use crate::config::ServerConfig;
use crate::discovery::split_patterns;
use crate::error::SummaryError;
use crate::server;
use crate::summary::{ProjectSummarizer, Summary, SummaryOptions};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn resolve_project_path(cli: &Cli) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match &cli.path {
        Some(path) => cwd.join(path),
        None => cwd,
    }
}

fn write_output(path: &Path, summary: &Summary) -> Result<(), SummaryError> {
    fs::write(path, &summary.markdown).map_err(|e| SummaryError::WriteOutput {
        path: path.display().to_string(),
        source: e,
    })
}

/// Default mode: full summary written to a markdown file.
pub fn handle_summarize(cli: &Cli) -> ExitCode {
    let project_path = resolve_project_path(cli);
    println!(
        "{} Analyzing project at: {}",
        "Info:".cyan(),
        project_path.display()
    );

    let patterns = cli.patterns.as_deref().map(split_patterns);
    let options = SummaryOptions {
        project_path,
        patterns,
    };

    let summary = match ProjectSummarizer::new().summarize(&options) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::from(1);
        }
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("./{}_summary.md", summary.project_name)));

    if let Err(e) = write_output(&output, &summary) {
        eprintln!("{} {}", "Error:".red(), e);
        return ExitCode::from(1);
    }

    println!(
        "{} Summary has been saved to {}",
        "Done:".green(),
        output.display()
    );
    ExitCode::SUCCESS
}

/// `--structure`: directory structure only.
pub fn handle_structure(cli: &Cli) -> ExitCode {
    let project_path = resolve_project_path(cli);
    println!(
        "{} Analyzing project at: {}",
        "Info:".cyan(),
        project_path.display()
    );

    let options = SummaryOptions {
        project_path,
        patterns: None,
    };

    let summary = match ProjectSummarizer::new().structure_only(&options) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::from(1);
        }
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("./structure.md"));

    if let Err(e) = write_output(&output, &summary) {
        eprintln!("{} {}", "Error:".red(), e);
        return ExitCode::from(1);
    }

    println!(
        "{} Directory structure has been saved to {}",
        "Done:".green(),
        output.display()
    );
    ExitCode::SUCCESS
}

/// `--serve`: run the HTTP server until interrupted.
pub fn handle_serve(cli: &Cli) -> ExitCode {
    let project_root = resolve_project_path(cli);
    let config = ServerConfig::load(&project_root);
    let port = cli.port.unwrap_or(config.port);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{} Failed to create async runtime: {}", "Error:".red(), e);
            return ExitCode::from(2);
        }
    };

    match runtime.block_on(server::run(project_root, port)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_output_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        let summary = Summary {
            project_name: "x".to_string(),
            files: vec![],
            markdown: "# x\n".to_string(),
        };

        let missing_parent = dir.path().join("no-such-dir/out.md");
        let err = write_output(&missing_parent, &summary).unwrap_err();
        assert!(err.to_string().contains("no-such-dir"));
    }

    #[test]
    fn test_write_output_writes_markdown() {
        let dir = TempDir::new().unwrap();
        let summary = Summary {
            project_name: "x".to_string(),
            files: vec![],
            markdown: "# x\n".to_string(),
        };

        let path = dir.path().join("out.md");
        write_output(&path, &summary).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# x\n");
    }
}
