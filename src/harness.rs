//! Wall-clock timing of [`quicksort`](crate::quicksort) across pivot policies and input cases.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Serialize, Serializer};

use crate::config::{Partitioning, SortConfig};
use crate::error::Result;
use crate::patterns::CaseType;
use crate::pivot::PivotPolicy;
use crate::quicksort::{self, SortStats};

/// Sizes used by the full sweep unless told otherwise.
pub const DEFAULT_SIZES: [usize; 6] = [100, 500, 1_000, 5_000, 10_000, 20_000];

/// One timed sort call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub size: usize,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    pub stats: SortStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub pivot: PivotPolicy,
    pub case: CaseType,
    /// One entry per requested size, in request order.
    pub samples: Vec<Sample>,
}

impl BenchmarkResult {
    pub fn durations(&self) -> Vec<Duration> {
        self.samples.iter().map(|s| s.elapsed).collect()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.size).collect()
    }

    pub fn label(&self) -> String {
        format!("{} ({} pivot)", self.case, self.pivot)
    }
}

/// All nine pivot/case combinations over the same sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub sizes: Vec<usize>,
    pub max_depth: usize,
    pub partitioning: Partitioning,
    /// Pivot-major: first/best, first/worst, first/average, last/best, ..
    pub results: Vec<BenchmarkResult>,
}

impl SweepReport {
    pub fn get(&self, pivot: PivotPolicy, case: CaseType) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.pivot == pivot && r.case == case)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Generates the `case` input of length `size` and times one full sort of it. Generation is
/// not part of the measurement and the sorted output is discarded.
pub fn time_sort<R>(case: CaseType, size: usize, config: &SortConfig, rng: &mut R) -> Sample
where
    R: Rng + ?Sized,
{
    let input = case.generate(size, rng);

    let start = Instant::now();
    let outcome = quicksort::sort_with(&input, config, rng);
    let elapsed = start.elapsed();

    let stats = black_box(outcome).stats;

    tracing::debug!(
        pivot = %config.pivot,
        %case,
        size,
        elapsed_us = elapsed.as_micros() as u64,
        complete = stats.is_complete(),
        "sample"
    );

    Sample {
        size,
        elapsed,
        stats,
    }
}

/// Times one sort per entry of `sizes` using `pivot` and the remaining settings of `config`.
#[tracing::instrument(skip_all, fields(pivot = %pivot, case = %case, sizes = sizes.len()))]
pub fn benchmark<R>(
    pivot: PivotPolicy,
    case: CaseType,
    sizes: &[usize],
    config: &SortConfig,
    rng: &mut R,
) -> BenchmarkResult
where
    R: Rng + ?Sized,
{
    let config = config.with_pivot(pivot);
    let samples = sizes
        .iter()
        .map(|&size| time_sort(case, size, &config, &mut *rng))
        .collect();

    BenchmarkResult {
        pivot,
        case,
        samples,
    }
}

/// Like [`benchmark`], both tags are validated before anything is generated or timed.
pub fn benchmark_tagged<R>(
    pivot_tag: &str,
    case_tag: &str,
    sizes: &[usize],
    config: &SortConfig,
    rng: &mut R,
) -> Result<BenchmarkResult>
where
    R: Rng + ?Sized,
{
    let pivot: PivotPolicy = pivot_tag.parse()?;
    let case: CaseType = case_tag.parse()?;
    Ok(benchmark(pivot, case, sizes, config, rng))
}

/// Runs [`benchmark`] for every pivot policy and case type. `config.pivot` is ignored.
#[tracing::instrument(skip_all, fields(sizes = sizes.len(), partitioning = %config.partitioning))]
pub fn sweep<R>(sizes: &[usize], config: &SortConfig, rng: &mut R) -> SweepReport
where
    R: Rng + ?Sized,
{
    let mut results = Vec::with_capacity(PivotPolicy::ALL.len() * CaseType::ALL.len());

    for pivot in PivotPolicy::ALL {
        for case in CaseType::ALL {
            tracing::info!(%pivot, %case, "benchmarking");
            results.push(benchmark(pivot, case, sizes, config, rng));
        }
    }

    SweepReport {
        sizes: sizes.to_vec(),
        max_depth: config.max_depth,
        partitioning: config.partitioning,
        results,
    }
}

fn serialize_secs<S>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64())
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        for sample in &self.samples {
            write!(f, "  {:>8}  {:>12.6} s", sample.size, sample.elapsed.as_secs_f64())?;
            if !sample.stats.is_complete() {
                write!(
                    f,
                    "  (short-circuits: {}, dropped: {}, misplaced: {}, depth limit hits: {})",
                    sample.stats.short_circuits,
                    sample.stats.dropped,
                    sample.stats.misplaced,
                    sample.stats.depth_limit_hits
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "quicksort sweep, partitioning: {}, max depth: {}",
            self.partitioning, self.max_depth
        )?;
        for result in &self.results {
            write!(f, "{result}")?;
        }
        Ok(())
    }
}
