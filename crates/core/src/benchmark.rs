//! Benchmark list.
//!
//! Each benchmark's results land in a file named after the benchmark binary and its
//! command line, with path separators and spaces mangled into underscores. The names
//! are not derived at run time: the lab dataset is fixed, so the filenames are kept
//! as literals here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Result filenames of the default lab dataset, in table order.
///
/// The first six are integer workloads, the rest floating point. Two benchmarks of the
/// suite produce no results; see [`Gap`](crate::config::Gap).
mod defaults {
    pub const BENCHMARKS: [(&str, &str); 11] = [
        ("bzip2", "bzip2_base.gcc4-high-opt___input.random___2.out"),
        ("cc1", "cc1_base.gcc4-high-opt___cccp.i___-o___foo.o.out"),
        ("crafty", "crafty_base.gcc4-high-opt_______crafty.in.out"),
        (
            "gap",
            "gap_base.gcc4-high-opt___-l___input___-q___-m___64M_______test.in.out",
        ),
        ("gzip", "gzip_base.gcc4-high-opt___input.compressed___2.out"),
        (
            "parser",
            "parser_base.gcc4-high-opt___2.1.dict___-batch_______test.in.out",
        ),
        ("applu", "applu_base.gcc4-high-opt_______applu.in.out"),
        (
            "art",
            "art_base.gcc4-high-opt___-scanfile___c756hel.in___-trainfile1___a10.img___-stride___2___-startx___134___-starty___220___-endx___139___-endy___225___-objects___1.out",
        ),
        ("equake", "equake_base.gcc4-high-opt_______inp.in.out"),
        (
            "mesa",
            "mesa_base.gcc4-high-opt___-frames___10___-meshfile___mesa.in.out",
        ),
        ("swim", "swim_base.gcc4-high-opt_______swim.in.out"),
    ];
}

/// One benchmark and the name of its result file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Benchmark {
    /// Short benchmark name, used only in log output.
    pub name: String,
    /// Result filename, relative to the results directory.
    pub file: String,
}

impl Benchmark {
    /// Creates a benchmark entry.
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }

    /// Full path of this benchmark's result file inside `dir`.
    pub fn result_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file)
    }
}

/// Ordered list of benchmarks; order fixes the table's row order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkList(Vec<Benchmark>);

impl BenchmarkList {
    /// Wraps an explicit list.
    pub const fn new(benchmarks: Vec<Benchmark>) -> Self {
        Self(benchmarks)
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list names no benchmarks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Benchmark> {
        self.0.iter()
    }
}

impl Default for BenchmarkList {
    fn default() -> Self {
        Self(
            defaults::BENCHMARKS
                .iter()
                .map(|&(name, file)| Benchmark::new(name, file))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a BenchmarkList {
    type Item = &'a Benchmark;
    type IntoIter = std::slice::Iter<'a, Benchmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
