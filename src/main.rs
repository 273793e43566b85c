use clap::Parser;
use mds::Cli;
use mds::handlers::{handle_serve, handle_structure, handle_summarize};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if cli.serve {
        return handle_serve(&cli);
    }

    if cli.structure {
        return handle_structure(&cli);
    }

    handle_summarize(&cli)
}
