//! Main splitter service that ties all components together.

use std::path::{Path, PathBuf};

use crate::classify::{classify_all, ClassifiedLine};
use crate::document::InputDocument;
use crate::error::Result;
use crate::output::{derive_output_path, write_region_file};
use crate::registry::Region;

/// Options for a single split run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Print the resolved input and output paths.
    pub verbose: bool,
}

/// A region file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFile {
    pub region: Region,
    pub path: PathBuf,
    pub lines: usize,
}

/// Outcome of a split run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub input: PathBuf,
    pub total_lines: usize,

    /// Files written, in registry order.
    pub files: Vec<RegionFile>,
}

/// Split `input` into one file per district it mentions.
///
/// The whole document is read and classified before the first file is
/// written. Regions with no tagged line produce no file. Processing stops at
/// the first write failure; files written before it stay on disk.
///
/// # Errors
/// Returns the read/decode error for the input, or the first write error.
pub fn split_file(input: &Path, options: &SplitOptions) -> Result<SplitReport> {
    if options.verbose {
        println!("Input file: {}", absolute_display(input).display());
    }

    let document = InputDocument::read(input)?;
    let classified = classify_all(&document.lines);
    tracing::debug!(
        lines = classified.len(),
        tagged = classified.iter().filter(|l| l.region().is_some()).count(),
        "classified input"
    );

    let mut files = Vec::new();
    for region in regions_present(&classified) {
        let path = derive_output_path(input, region.code());
        if options.verbose {
            println!("Output file: {}", absolute_display(&path).display());
        }

        let lines = write_region_file(&path, lines_for(region, &classified))?;
        tracing::info!(region = %region, path = %path.display(), lines, "region file written");
        files.push(RegionFile {
            region,
            path,
            lines,
        });
    }

    if files.is_empty() {
        tracing::info!(path = %input.display(), "no marked lines, nothing written");
    }

    Ok(SplitReport {
        input: input.to_path_buf(),
        total_lines: classified.len(),
        files,
    })
}

/// Regions referenced by at least one tagged line, in registry order.
#[must_use]
pub fn regions_present(classified: &[ClassifiedLine]) -> Vec<Region> {
    Region::ALL
        .into_iter()
        .filter(|&region| classified.iter().any(|l| l.region() == Some(region)))
        .collect()
}

/// Lines that go into the file for `region`, in input order.
pub fn lines_for(
    region: Region,
    classified: &[ClassifiedLine],
) -> impl Iterator<Item = &str> + '_ {
    classified
        .iter()
        .filter(move |line| line.belongs_to(region))
        .map(ClassifiedLine::text)
}

fn absolute_display(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
