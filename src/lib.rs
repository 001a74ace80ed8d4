//! Testbed for an allocating quicksort, comparing first, last and random pivot selection on
//! ascending, descending and random inputs.

pub mod command;
pub mod config;
pub mod error;
pub mod harness;
pub mod patterns;
pub mod pivot;
pub mod quicksort;
pub mod rng;

pub use config::{Partitioning, SortConfig, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
pub use harness::{benchmark, benchmark_tagged, sweep, BenchmarkResult, Sample, SweepReport};
pub use patterns::{average_case, best_case, worst_case, CaseType};
pub use pivot::PivotPolicy;
pub use quicksort::{sort, sort_by_with, sort_tagged, sort_with, SortOutcome, SortStats};
