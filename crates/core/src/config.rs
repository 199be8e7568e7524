//! Configuration for table assembly.
//!
//! This module defines every knob the table builder exposes. It provides:
//! 1. **Defaults:** The lab dataset's benchmark list and gap placement.
//! 2. **Structures:** [`TableConfig`] and its nested [`Gap`].
//! 3. **Enums:** Value [`Validation`] mode and output [`Layout`].
//!
//! Configuration is optional. `TableConfig::default()` reproduces the lab's table; a
//! JSON file can override any subset of fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::benchmark::BenchmarkList;
use crate::error::{Result, ResultsError};

/// Default configuration constants.
mod defaults {
    /// Number of benchmarks preceding the placeholder rows.
    ///
    /// The integer workloads come first; the two missing benchmarks sit between them
    /// and the floating point workloads.
    pub const GAP_AFTER: usize = 6;

    /// Number of placeholder rows.
    pub const GAP_WIDTH: usize = 2;
}

/// How result values are checked while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Validation {
    /// Values are passed through verbatim; non-numeric values are only logged.
    #[default]
    Opaque,
    /// Every value must parse as an unsigned integer.
    Numeric,
}

/// Shape of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Layout {
    /// One line per benchmark, the four categories separated by tabs.
    #[default]
    #[serde(alias = "rows")]
    Rows,
    /// One block per category, one value per line, blocks separated by a blank line.
    #[serde(alias = "blocks")]
    Blocks,
}

/// Run of empty placeholder rows inserted into every column.
///
/// Stands in for benchmarks that belong in the table but have no results, so the
/// output lines up with a spreadsheet laid out for the full suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Gap {
    /// Number of benchmark rows before the placeholders.
    #[serde(default = "Gap::default_after")]
    pub after: usize,

    /// Number of placeholder rows; zero disables the gap.
    #[serde(default = "Gap::default_width")]
    pub width: usize,
}

impl Gap {
    /// No placeholder rows.
    pub const NONE: Self = Self { after: 0, width: 0 };

    fn default_after() -> usize {
        defaults::GAP_AFTER
    }

    fn default_width() -> usize {
        defaults::GAP_WIDTH
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self {
            after: defaults::GAP_AFTER,
            width: defaults::GAP_WIDTH,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use bpresults_core::config::{Layout, TableConfig, Validation};
///
/// let json = r#"{
///     "benchmarks": [
///         { "name": "bzip2", "file": "bzip2.out" },
///         { "name": "swim", "file": "swim.out" }
///     ],
///     "gap": { "after": 1, "width": 3 },
///     "validation": "Numeric",
///     "layout": "Blocks"
/// }"#;
///
/// let config: TableConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.benchmarks.len(), 2);
/// assert_eq!(config.gap.width, 3);
/// assert_eq!(config.validation, Validation::Numeric);
/// assert_eq!(config.layout, Layout::Blocks);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// Benchmarks in row order.
    #[serde(default)]
    pub benchmarks: BenchmarkList,

    /// Placeholder rows.
    #[serde(default)]
    pub gap: Gap,

    /// Value checking mode.
    #[serde(default)]
    pub validation: Validation,

    /// Output layout.
    #[serde(default)]
    pub layout: Layout,
}

impl TableConfig {
    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ResultsError::ConfigRead`] if the file cannot be read,
    /// [`ResultsError::ConfigParse`] if it is not a valid configuration, or any error
    /// from [`TableConfig::validate`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ResultsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| ResultsError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            benchmarks = config.benchmarks.len(),
            "loaded table config"
        );
        Ok(config)
    }

    /// Checks that the configuration can produce a table.
    ///
    /// # Errors
    ///
    /// [`ResultsError::EmptyBenchmarkList`] if no benchmarks are listed,
    /// [`ResultsError::InvalidGap`] if the gap sits past the last benchmark.
    pub fn validate(&self) -> Result<()> {
        if self.benchmarks.is_empty() {
            return Err(ResultsError::EmptyBenchmarkList);
        }
        if self.gap.width > 0 && self.gap.after > self.benchmarks.len() {
            return Err(ResultsError::InvalidGap {
                after: self.gap.after,
                len: self.benchmarks.len(),
            });
        }
        Ok(())
    }

    /// Total number of table rows, placeholders included.
    pub fn row_count(&self) -> usize {
        self.benchmarks.len() + self.gap.width
    }
}
