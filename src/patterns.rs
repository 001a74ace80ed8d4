//! Input sequences for the three benchmark cases.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::error::{Error, Result};

/// Which input distribution a benchmark run sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// Already ascending, see [`best_case`].
    Best,
    /// Strictly descending, see [`worst_case`].
    Worst,
    /// Uniformly random with duplicates, see [`average_case`].
    Average,
}

impl CaseType {
    pub const ALL: [CaseType; 3] = [CaseType::Best, CaseType::Worst, CaseType::Average];

    pub fn name(self) -> &'static str {
        match self {
            CaseType::Best => "best",
            CaseType::Worst => "worst",
            CaseType::Average => "average",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, len: usize, rng: &mut R) -> Vec<i64> {
        match self {
            CaseType::Best => best_case(len),
            CaseType::Worst => worst_case(len),
            CaseType::Average => average_case(len, rng),
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "best" => Ok(CaseType::Best),
            "worst" => Ok(CaseType::Worst),
            "average" => Ok(CaseType::Average),
            _ => Err(Error::invalid("case type", s, &["best", "worst", "average"])),
        }
    }
}

/// `[0, 1, .., len - 1]`
pub fn best_case(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// `[len, len - 1, .., 1]`
pub fn worst_case(len: usize) -> Vec<i64> {
    (1..=len as i64).rev().collect()
}

/// `len` values drawn independently and uniformly from `[0, len)`. Values may repeat or be
/// missing entirely.
pub fn average_case<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    let upper = len as i64;
    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}

/// Parses `case_tag` and generates the matching input.
pub fn generate_case<R: Rng + ?Sized>(case_tag: &str, len: usize, rng: &mut R) -> Result<Vec<i64>> {
    Ok(case_tag.parse::<CaseType>()?.generate(len, rng))
}
