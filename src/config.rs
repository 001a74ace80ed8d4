use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::pivot::PivotPolicy;

/// Segments reached deeper than this are returned unsorted.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Selects between the historical partition scheme and a corrected one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Partitioning {
    /// Partitions `v[1..]` around the pivot value and keeps `v[0]` in the middle part. If
    /// either outer part comes out empty only the middle part is returned, the other part is
    /// dropped. Results are frequently incomplete, the timings this produces are the ones the
    /// benchmark was designed around.
    #[default]
    Legacy,
    /// Three-way partition of the whole slice around the pivot value, recursing into every
    /// non-empty side. Sorts correctly as long as the depth limit isn't hit.
    ThreeWay,
}

impl Partitioning {
    pub fn name(self) -> &'static str {
        match self {
            Partitioning::Legacy => "legacy",
            Partitioning::ThreeWay => "three-way",
        }
    }
}

impl fmt::Display for Partitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Partitioning {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Partitioning::Legacy),
            "three-way" | "three_way" | "threeway" => Ok(Partitioning::ThreeWay),
            _ => Err(Error::invalid("partitioning", s, &["legacy", "three-way"])),
        }
    }
}

/// Parameters for a single top-level sort call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortConfig {
    pub pivot: PivotPolicy,
    pub max_depth: usize,
    pub partitioning: Partitioning,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            pivot: PivotPolicy::First,
            max_depth: DEFAULT_MAX_DEPTH,
            partitioning: Partitioning::Legacy,
        }
    }
}

impl SortConfig {
    pub fn new(pivot: PivotPolicy) -> Self {
        Self {
            pivot,
            ..Self::default()
        }
    }

    pub fn with_pivot(mut self, pivot: PivotPolicy) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_partitioning(mut self, partitioning: Partitioning) -> Self {
        self.partitioning = partitioning;
        self
    }
}
