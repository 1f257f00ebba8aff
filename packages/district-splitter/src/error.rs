//! Error types for the splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// No input path was given on the command line.
    #[error("Please specify input file")]
    MissingInput,

    /// The input file could not be opened or read.
    #[error("Failed to read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid in the document encoding.
    #[error("Input file {} is not valid {}", .path.display(), crate::config::ENCODING.name())]
    Decode { path: PathBuf },

    /// A region file could not be written.
    #[error("Failed to write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
