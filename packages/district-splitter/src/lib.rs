//! District Splitter - split CP866 incident reports by Saint Petersburg district.
//!
//! A report is a plain text file in IBM code page 866. Lines starting with a
//! marker (`\six`, `\ml`, `\st`, `\euler`) are tagged with the first district
//! they name, or with the catch-all `other` region. For every region that
//! occurs, a sibling file `<name>-<region>.<ext>` is written containing that
//! region's lines plus every untagged line, in input order.
//!
//! # Example
//!
//! ```
//! use district_splitter::{classify, Region};
//!
//! let line = classify(r"\six Outage in Адмиралтейский district");
//! assert_eq!(line.region(), Some(Region::Adm));
//! ```
//!
//! # Architecture
//!
//! - [`registry`]: District and marker tables
//! - [`classify`]: Line classification
//! - [`document`]: Reading and decoding the input
//! - [`output`]: Output naming and encoded writing
//! - [`splitter`]: The end-to-end run
//! - [`config`]: Fixed constants
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod classify;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod registry;
pub mod splitter;

pub use splitter::split_file;

pub use classify::{classify, ClassifiedLine};
pub use error::{Result, SplitterError};
pub use registry::{LinePrefix, Region};
pub use splitter::{SplitOptions, SplitReport};
