//! Structured requests in, structured results out. Front ends (the CLI binary, tests) build a
//! [`Request`] and render the [`Response`] however they like.

use rand::Rng;

use crate::config::SortConfig;
use crate::error::Result;
use crate::harness::{self, BenchmarkResult, Sample, SweepReport, DEFAULT_SIZES};
use crate::patterns::CaseType;
use crate::pivot::PivotPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Time a single sort of one generated input.
    Run {
        pivot: PivotPolicy,
        case: CaseType,
        size: usize,
    },
    Benchmark {
        pivot: PivotPolicy,
        case: CaseType,
        sizes: Vec<usize>,
    },
    /// Every pivot/case combination. An empty size list means [`DEFAULT_SIZES`].
    Sweep { sizes: Vec<usize> },
}

impl Request {
    /// Builds a [`Request::Run`] from raw tags.
    pub fn run(pivot_tag: &str, case_tag: &str, size: usize) -> Result<Self> {
        Ok(Request::Run {
            pivot: pivot_tag.parse()?,
            case: case_tag.parse()?,
            size,
        })
    }

    /// Builds a [`Request::Benchmark`] from raw tags.
    pub fn benchmark(pivot_tag: &str, case_tag: &str, sizes: Vec<usize>) -> Result<Self> {
        Ok(Request::Benchmark {
            pivot: pivot_tag.parse()?,
            case: case_tag.parse()?,
            sizes,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Run {
        pivot: PivotPolicy,
        case: CaseType,
        sample: Sample,
    },
    Benchmark(BenchmarkResult),
    Sweep(SweepReport),
}

pub fn dispatch<R>(request: Request, config: &SortConfig, rng: &mut R) -> Response
where
    R: Rng + ?Sized,
{
    match request {
        Request::Run { pivot, case, size } => {
            let sample = harness::time_sort(case, size, &config.with_pivot(pivot), rng);
            Response::Run {
                pivot,
                case,
                sample,
            }
        }
        Request::Benchmark { pivot, case, sizes } => {
            Response::Benchmark(harness::benchmark(pivot, case, &sizes, config, rng))
        }
        Request::Sweep { sizes } => {
            let sizes = if sizes.is_empty() {
                DEFAULT_SIZES.to_vec()
            } else {
                sizes
            };
            Response::Sweep(harness::sweep(&sizes, config, rng))
        }
    }
}
