//! Error definitions.
//!
//! Every failure is fatal to a table build: the first error stops the run and no
//! partial table is produced. Variants carry the path involved so the binary can
//! report a useful message without extra context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::Category;

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, ResultsError>;

/// Errors raised while loading configuration or reading result files.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// A result file is missing or could not be read. Content problems, including
    /// invalid UTF-8, are reported by the malformed-file variants instead.
    #[error("could not read result file '{}': {source}", .path.display())]
    Io {
        /// Path of the result file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A result line does not hold exactly four label/value pairs.
    #[error(
        "malformed result line in '{}': expected {expected} space-separated tokens, found {found}",
        .path.display(),
        expected = crate::record::TOKENS_PER_LINE
    )]
    MalformedLine {
        /// Path of the result file.
        path: PathBuf,
        /// Number of tokens actually present.
        found: usize,
    },

    /// A result file holds more than one line once trailing newlines are removed.
    #[error("malformed result file '{}': expected a single line", .path.display())]
    MultipleLines {
        /// Path of the result file.
        path: PathBuf,
    },

    /// A result file is readable but is not UTF-8 text.
    #[error("malformed result file '{}': not valid UTF-8", .path.display())]
    NotUtf8 {
        /// Path of the result file.
        path: PathBuf,
    },

    /// A value failed numeric validation.
    #[error("non-numeric {category} value '{value}' in '{}'", .path.display())]
    NonNumericValue {
        /// Path of the result file.
        path: PathBuf,
        /// Category whose value was rejected.
        category: Category,
        /// The offending token, verbatim.
        value: String,
    },

    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", .path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`TableConfig`](crate::TableConfig).
    #[error("could not parse config '{}': {source}", .path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The gap is placed past the end of the benchmark list.
    #[error("gap after position {after} is outside a list of {len} benchmarks")]
    InvalidGap {
        /// Requested insertion point.
        after: usize,
        /// Number of benchmarks in the list.
        len: usize,
    },

    /// The configuration names no benchmarks.
    #[error("benchmark list is empty")]
    EmptyBenchmarkList,
}
