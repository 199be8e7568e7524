//! Branch predictor results collection library.
//!
//! This crate turns the per-benchmark result files left behind by the branch predictor
//! lab tool into a single tab-separated table. It provides:
//! 1. **Records:** Parsing of one result line into its four outcome counters.
//! 2. **Benchmarks:** The ordered list of benchmarks and their result filenames.
//! 3. **Configuration:** JSON-overridable benchmark list, gap placement, and validation.
//! 4. **Table:** Reading a results directory and rendering the combined table.

/// Benchmark names and the result filenames they map to.
pub mod benchmark;
/// Table configuration (benchmark list, gap, validation, layout).
pub mod config;
/// Error type shared by every fallible operation in the crate.
pub mod error;
/// Parsing of a single result line.
pub mod record;
/// Results directory reader and table renderer.
pub mod table;

/// Ordered benchmark list; use `BenchmarkList::default()` for the lab dataset.
pub use crate::benchmark::{Benchmark, BenchmarkList};
/// Root configuration type; use `TableConfig::default()` or `TableConfig::from_file`.
pub use crate::config::{Gap, Layout, TableConfig, Validation};
/// Crate-wide error and result alias.
pub use crate::error::{Result, ResultsError};
/// Parsed result line and its value categories.
pub use crate::record::{BranchRecord, Category};
/// Assembled table; construct with `ResultTable::build`.
pub use crate::table::ResultTable;
