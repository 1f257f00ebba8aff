//! Command-line interface for the splitter.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::error::{Result, SplitterError};
use crate::splitter::{split_file, SplitOptions, SplitReport};

/// Split a CP866 incident report into one file per district.
///
/// Lines starting with \six, \ml, \st or \euler go to the file of the first
/// district they name; all other lines are copied into every file.
#[derive(Parser, Debug)]
#[command(name = "district-splitter")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Report to split; outputs are written next to it as <name>-<district>.<ext>
    #[arg(allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Any value enables verbose output; the values themselves are ignored
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub verbose: Vec<String>,
}

impl Cli {
    #[must_use]
    pub fn options(&self) -> SplitOptions {
        SplitOptions {
            verbose: !self.verbose.is_empty(),
        }
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Execute a parsed command line.
///
/// # Errors
/// `SplitterError::MissingInput` when no input path was given, otherwise
/// whatever the split run reports.
pub fn execute(cli: &Cli) -> Result<()> {
    let input = cli.input.as_deref().ok_or(SplitterError::MissingInput)?;
    let options = cli.options();

    let report = split_file(input, &options)?;
    if options.verbose {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &SplitReport) {
    println!();
    if report.files.is_empty() {
        println!(
            "{} {} lines, no district markers found",
            style("Read").bold(),
            report.total_lines
        );
        return;
    }

    println!(
        "{} {} lines into {} files",
        style("Split").bold(),
        report.total_lines,
        style(report.files.len()).cyan()
    );
    for file in &report.files {
        println!(
            "  {:<8} {:>6} lines  {}",
            style(file.region.code()).green(),
            file.lines,
            file.path.display()
        );
    }
}
