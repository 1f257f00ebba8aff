//! Region file naming and writing.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{ENCODING, LINE_ENDING};
use crate::error::{Result, SplitterError};

/// Derive a sibling path by inserting `-suffix` before the extension.
///
/// A missing extension still yields the trailing dot, so `notes` becomes
/// `notes-adm.`. A leading-dot name is all extension, so `.hidden` becomes
/// `-adm.hidden`.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use district_splitter::output::derive_output_path;
///
/// assert_eq!(
///     derive_output_path(Path::new("data/report.txt"), "adm"),
///     Path::new("data/report-adm.txt")
/// );
/// ```
#[must_use]
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let (stem, ext) = stem_and_extension(input);

    let mut name = OsString::new();
    name.push(stem);
    name.push("-");
    name.push(suffix);
    name.push(".");
    name.push(ext);

    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// Split the file name at its last dot.
fn stem_and_extension(input: &Path) -> (&OsStr, &OsStr) {
    let empty = OsStr::new("");
    match (input.file_stem(), input.extension()) {
        (Some(stem), Some(ext)) => (stem, ext),
        // `Path` keeps `.hidden` whole as the stem
        (Some(stem), None) => match stem.to_str().and_then(|s| s.strip_prefix('.')) {
            Some(ext) => (empty, OsStr::new(ext)),
            None => (stem, empty),
        },
        _ => (empty, empty),
    }
}

/// Write `lines` to `path` in the document encoding, one per line.
///
/// The content goes to a hidden temp file that is then renamed over `path`,
/// so a failed run never leaves a half-written region file behind.
///
/// Returns the number of lines written.
///
/// # Errors
/// `SplitterError::WriteOutput` on any create, write or rename failure.
pub fn write_region_file<'a, I>(path: &Path, lines: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let wrap = |source: std::io::Error| SplitterError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let temp_file = temp_path(path);
    let count = write_encoded(&temp_file, lines).map_err(|e| {
        let _ = fs::remove_file(&temp_file);
        wrap(e)
    })?;

    replace_file(&temp_file, path).map_err(|e| {
        let _ = fs::remove_file(&temp_file);
        wrap(e)
    })?;
    tracing::debug!(path = %path.display(), lines = count, "wrote region file");
    Ok(count)
}

fn write_encoded<'a, I>(path: &Path, lines: I) -> std::io::Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for line in lines {
        let (bytes, _, unmappable) = ENCODING.encode(line);
        if unmappable {
            tracing::warn!(line = count + 1, "line contains characters outside the output encoding");
        }
        writer.write_all(&bytes)?;
        writer.write_all(LINE_ENDING.as_bytes())?;
        count += 1;
    }
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(count)
}

fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if to.exists() {
        fs::remove_file(to)?;
    }

    fs::rename(from, to)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(".tmp");
    path.with_file_name(name)
}
