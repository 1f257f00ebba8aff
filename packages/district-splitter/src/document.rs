//! Reading and decoding the input report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ENCODING;
use crate::error::{Result, SplitterError};

/// The decoded input report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Path the document was read from.
    pub path: PathBuf,

    /// Lines in file order, without terminators.
    pub lines: Vec<String>,
}

impl InputDocument {
    /// Read and decode a whole file.
    ///
    /// # Errors
    /// * `SplitterError::ReadInput` if the file cannot be opened or read
    /// * `SplitterError::Decode` if the bytes are malformed for the encoding
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SplitterError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");

        let lines = decode_lines(&bytes).ok_or_else(|| SplitterError::Decode {
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines,
        })
    }
}

/// Decode raw bytes and split them into lines.
///
/// Returns `None` if the decoder reports malformed input.
#[must_use]
pub fn decode_lines(bytes: &[u8]) -> Option<Vec<String>> {
    let (text, had_errors) = ENCODING.decode_without_bom_handling(bytes);
    if had_errors {
        return None;
    }
    Some(split_lines(&text))
}

/// Split on `\r\n`, bare `\r` or `\n`.
///
/// A terminator at the very end does not start another line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}
