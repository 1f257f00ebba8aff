//! CLI entry point for the splitter.

use district_splitter::cli;
use district_splitter::config::{DEFAULT_LOG_FILTER, EXIT_FAILURE, EXIT_USAGE};
use district_splitter::SplitterError;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli::run() {
        Ok(()) => {}
        Err(SplitterError::MissingInput) => {
            println!("{}", SplitterError::MissingInput);
            std::process::exit(EXIT_USAGE);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_FAILURE);
        }
    }
}
