//! Results table assembly and rendering.
//!
//! A table is built in one pass over the benchmark list: read the file, parse the
//! record, push its four values onto the four category columns. Placeholder rows are
//! added once every file has been read, so a failure anywhere leaves nothing to
//! render.

use std::fs;
use std::path::Path;

use crate::config::{Gap, Layout, TableConfig};
use crate::error::{Result, ResultsError};
use crate::record::{BranchRecord, Category, PAIRS_PER_LINE};

/// Branch outcome counters for every benchmark, stored column-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    columns: [Vec<String>; PAIRS_PER_LINE],
}

impl ResultTable {
    /// Reads every result file named by `config` from `dir` and assembles the table.
    ///
    /// Files are read in list order and the first failure aborts the build.
    ///
    /// # Errors
    ///
    /// Any configuration error from [`TableConfig::validate`], [`ResultsError::Io`] for
    /// a missing or unreadable file, [`ResultsError::NotUtf8`] for a file that is not
    /// text, and parse errors from [`BranchRecord::parse`].
    pub fn build(dir: &Path, config: &TableConfig) -> Result<Self> {
        config.validate()?;

        let mut records = Vec::with_capacity(config.benchmarks.len());
        for bench in &config.benchmarks {
            let path = bench.result_path(dir);
            let bytes = fs::read(&path).map_err(|source| ResultsError::Io {
                path: path.clone(),
                source,
            })?;
            let contents = String::from_utf8(bytes)
                .map_err(|_| ResultsError::NotUtf8 { path: path.clone() })?;
            tracing::debug!(benchmark = %bench.name, path = %path.display(), "read result file");
            records.push(BranchRecord::parse(&path, &contents, config.validation)?);
        }

        let mut table = Self::from_records(records);
        table.insert_gap(config.gap);
        tracing::info!(
            benchmarks = config.benchmarks.len(),
            rows = table.row_count(),
            "assembled results table"
        );
        Ok(table)
    }

    /// Builds a table from already parsed records, without placeholders.
    pub fn from_records(records: impl IntoIterator<Item = BranchRecord>) -> Self {
        let mut columns: [Vec<String>; PAIRS_PER_LINE] = Default::default();
        for record in records {
            for (column, value) in columns.iter_mut().zip(record.into_values()) {
                column.push(value);
            }
        }
        Self { columns }
    }

    /// Inserts `gap.width` empty values after the first `gap.after` rows of every column.
    ///
    /// A gap past the end of the table is clamped to the end.
    pub fn insert_gap(&mut self, gap: Gap) {
        for column in &mut self.columns {
            let at = gap.after.min(column.len());
            let tail = column.split_off(at);
            column.extend(std::iter::repeat_n(String::new(), gap.width));
            column.extend(tail);
        }
    }

    /// Number of rows, placeholders included.
    pub fn row_count(&self) -> usize {
        self.columns[0].len()
    }

    /// Values of one category, top to bottom.
    pub fn column(&self, category: Category) -> &[String] {
        &self.columns[category.index()]
    }

    /// Iterates rows as `[takenCorrect, takenIncorrect, notTakenCorrect, notTakenIncorrect]`.
    pub fn rows(&self) -> impl Iterator<Item = [&str; PAIRS_PER_LINE]> + '_ {
        (0..self.row_count())
            .map(move |i| Category::ALL.map(|c| self.columns[c.index()][i].as_str()))
    }

    /// Renders the table as text. Every line, the last included, ends with `\n`.
    pub fn render(&self, layout: Layout) -> String {
        let mut out = String::new();
        match layout {
            Layout::Rows => {
                for row in self.rows() {
                    out.push_str(&row.join("\t"));
                    out.push('\n');
                }
            }
            Layout::Blocks => {
                for (i, column) in self.columns.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    for value in column {
                        out.push_str(value);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}
