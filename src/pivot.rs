use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::Error;

/// How the pivot value is picked from the slice currently being partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotPolicy {
    First,
    Last,
    Random,
}

impl PivotPolicy {
    pub const ALL: [PivotPolicy; 3] = [PivotPolicy::First, PivotPolicy::Last, PivotPolicy::Random];

    pub fn name(self) -> &'static str {
        match self {
            PivotPolicy::First => "first",
            PivotPolicy::Last => "last",
            PivotPolicy::Random => "random",
        }
    }

    /// Selects the pivot position in `v`.
    ///
    /// `v` must not be empty. Only [`PivotPolicy::Random`] draws from `rng`.
    pub fn choose_pivot<T, R>(self, v: &[T], rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        debug_assert!(!v.is_empty());

        match self {
            PivotPolicy::First => 0,
            PivotPolicy::Last => v.len() - 1,
            PivotPolicy::Random => rng.gen_range(0..v.len()),
        }
    }
}

impl fmt::Display for PivotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(PivotPolicy::First),
            "last" => Ok(PivotPolicy::Last),
            "random" => Ok(PivotPolicy::Random),
            _ => Err(Error::invalid("pivot policy", s, &["first", "last", "random"])),
        }
    }
}
