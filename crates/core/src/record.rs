//! Result line parsing.
//!
//! The branch predictor tool finishes each benchmark by writing one line of four
//! label/value pairs:
//!
//! ```text
//! takenCorrect 1041  takenIncorrect 77 notTakenCorrect 912 notTakenIncorrect 95
//! ```
//!
//! Labels are not checked. Values are kept as the exact strings found in the file.

use std::fmt;
use std::path::Path;

use crate::config::Validation;
use crate::error::{Result, ResultsError};

/// Number of label/value pairs on a result line.
pub const PAIRS_PER_LINE: usize = 4;

/// Number of non-empty tokens on a well-formed result line.
pub const TOKENS_PER_LINE: usize = PAIRS_PER_LINE * 2;

/// Outcome category of a conditional branch prediction.
///
/// Declaration order matches the order of the pairs on a result line and the
/// column order of the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Branch taken, predicted taken.
    TakenCorrect,
    /// Branch taken, predicted not taken.
    TakenIncorrect,
    /// Branch not taken, predicted not taken.
    NotTakenCorrect,
    /// Branch not taken, predicted taken.
    NotTakenIncorrect,
}

impl Category {
    /// All categories in line/column order.
    pub const ALL: [Self; PAIRS_PER_LINE] = [
        Self::TakenCorrect,
        Self::TakenIncorrect,
        Self::NotTakenCorrect,
        Self::NotTakenIncorrect,
    ];

    /// Column index of this category.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Label the branch predictor tool writes in front of this category's value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TakenCorrect => "takenCorrect",
            Self::TakenIncorrect => "takenIncorrect",
            Self::NotTakenCorrect => "notTakenCorrect",
            Self::NotTakenIncorrect => "notTakenIncorrect",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four counters of one benchmark, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRecord {
    values: [String; PAIRS_PER_LINE],
}

impl BranchRecord {
    /// Parses the contents of one result file.
    ///
    /// Trailing line terminators are removed and what remains must be a single line.
    /// Tokens are separated by runs of spaces, so the double space the tool writes after
    /// the first value does not produce an empty token. Tabs are not separators.
    ///
    /// # Arguments
    ///
    /// * `path` - File the contents came from, used only for error reporting.
    /// * `contents` - Raw file contents.
    /// * `validation` - Whether values must be unsigned integers.
    ///
    /// # Errors
    ///
    /// [`ResultsError::MultipleLines`] if a line break is left after trimming,
    /// [`ResultsError::MalformedLine`] if the line does not hold exactly
    /// [`TOKENS_PER_LINE`] tokens, [`ResultsError::NonNumericValue`] if numeric
    /// validation is on and a value does not parse.
    pub fn parse(path: &Path, contents: &str, validation: Validation) -> Result<Self> {
        let line = contents.trim_end_matches(['\n', '\r']);
        if line.contains(['\n', '\r']) {
            return Err(ResultsError::MultipleLines {
                path: path.to_path_buf(),
            });
        }
        let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
        if tokens.len() != TOKENS_PER_LINE {
            return Err(ResultsError::MalformedLine {
                path: path.to_path_buf(),
                found: tokens.len(),
            });
        }

        let mut values: [String; PAIRS_PER_LINE] = Default::default();
        for (category, pair) in Category::ALL.into_iter().zip(tokens.chunks_exact(2)) {
            let value = pair[1];
            if value.parse::<u64>().is_err() {
                match validation {
                    Validation::Numeric => {
                        return Err(ResultsError::NonNumericValue {
                            path: path.to_path_buf(),
                            category,
                            value: value.to_string(),
                        });
                    }
                    Validation::Opaque => {
                        tracing::warn!(
                            path = %path.display(),
                            %category,
                            value,
                            "passing through non-numeric value"
                        );
                    }
                }
            }
            values[category.index()] = value.to_string();
        }

        Ok(Self { values })
    }

    /// Value recorded for `category`.
    pub fn get(&self, category: Category) -> &str {
        &self.values[category.index()]
    }

    /// Consumes the record, yielding values in [`Category::ALL`] order.
    pub fn into_values(self) -> [String; PAIRS_PER_LINE] {
        self.values
    }
}
