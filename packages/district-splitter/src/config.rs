//! Fixed settings for the splitter.
//!
//! There is no runtime configuration: input and output encoding, the
//! log filter default and the CLI exit codes are all compile-time constants.

use encoding_rs::Encoding;

/// Encoding used for the input document and every region file.
///
/// Downstream consumers read the split files as DOS Cyrillic, so this must
/// stay IBM code page 866.
pub static ENCODING: &Encoding = &encoding_rs::IBM866_INIT;

/// Tracing filter applied when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Line terminator written after every output line.
pub const LINE_ENDING: &str = "\n";

/// Exit code when no input file was given.
pub const EXIT_USAGE: i32 = 2;

/// Exit code for read, decode and write failures.
pub const EXIT_FAILURE: i32 = 1;
