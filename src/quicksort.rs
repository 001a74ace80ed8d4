//! Allocating quicksort with selectable pivot policy and a recursion depth limit.
//!
//! Every level of the recursion splits its input into three freshly allocated parts, `left`,
//! `middle` and `right`, and the result is `sorted(left) ++ middle ++ sorted(right)`. The
//! recursion is driven by an explicit work stack instead of the call stack, so adversarial
//! inputs only cost heap memory. Output order and depth accounting are the same as for the
//! plain recursive formulation.
//!
//! With the default [`Partitioning::Legacy`] scheme the result is frequently *not* a
//! permutation of the input:
//!
//! ```text
//! sort([3, 1, 2], First) == [3]       // right side empty, [1, 2] is dropped
//! sort([2, 1, 3], First) == [1, 2, 3]
//! ```
//!
//! [`Partitioning::ThreeWay`] recurses into every non-empty side and never drops elements.

use std::cmp::Ordering;

use rand::Rng;
use serde::Serialize;

use crate::config::{Partitioning, SortConfig};
use crate::error::Result;
use crate::pivot::PivotPolicy;

/// What happened during one top-level sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Segments returned unsorted because they were reached beyond `max_depth`.
    pub depth_limit_hits: usize,
    /// Times the legacy scheme returned only the middle part.
    pub short_circuits: usize,
    /// Elements discarded by those short-circuits.
    pub dropped: usize,
    /// Times the legacy scheme kept a `v[0]` in the middle part that differs from the pivot
    /// value. The output is out of order around that element.
    pub misplaced: usize,
    /// Deepest recursion level visited, the top-level call is depth 0.
    pub max_depth: usize,
}

impl SortStats {
    /// `true` if the output is guaranteed to be a sorted permutation of the input.
    pub fn is_complete(&self) -> bool {
        self.depth_limit_hits == 0 && self.short_circuits == 0 && self.misplaced == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome<T> {
    pub values: Vec<T>,
    pub stats: SortStats,
}

/// Sorts `v` with `pivot` and otherwise default settings, drawing random pivots from the
/// thread local generator.
pub fn sort<T>(v: &[T], pivot: PivotPolicy) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_with(v, &SortConfig::new(pivot), &mut rand::thread_rng()).values
}

/// Like [`sort`] but parses the pivot policy from `pivot_tag` first.
pub fn sort_tagged<T, R>(
    v: &[T],
    pivot_tag: &str,
    config: &SortConfig,
    rng: &mut R,
) -> Result<SortOutcome<T>>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    let pivot: PivotPolicy = pivot_tag.parse()?;
    Ok(sort_with(v, &config.with_pivot(pivot), rng))
}

#[inline]
pub fn sort_with<T, R>(v: &[T], config: &SortConfig, rng: &mut R) -> SortOutcome<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    sort_by_with(v, |a, b| a.cmp(b), config, rng)
}

/// Sorts `v` with a comparator function.
///
/// The comparator must define a total order, elements comparing `Equal` to the pivot are
/// grouped together in the middle part in input order.
pub fn sort_by_with<T, F, R>(
    v: &[T],
    mut compare: F,
    config: &SortConfig,
    rng: &mut R,
) -> SortOutcome<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let mut stats = SortStats::default();
    let mut out = Vec::with_capacity(v.len());

    // LIFO, so `left` has to be pushed last to be emitted first.
    let mut stack = vec![Task::Sort(v.to_vec(), 0)];

    while let Some(task) = stack.pop() {
        let (seg, depth) = match task {
            Task::Emit(part) => {
                out.extend(part);
                continue;
            }
            Task::Sort(seg, depth) => (seg, depth),
        };

        stats.max_depth = stats.max_depth.max(depth);

        if seg.len() <= 1 {
            out.extend(seg);
            continue;
        }

        if depth > config.max_depth {
            stats.depth_limit_hits += 1;
            tracing::warn!(
                depth,
                len = seg.len(),
                max_depth = config.max_depth,
                "max recursion depth reached, returning segment unsorted"
            );
            out.extend(seg);
            continue;
        }

        let pivot_pos = config.pivot.choose_pivot(&seg, rng);

        if config.partitioning == Partitioning::Legacy
            && compare(&seg[0], &seg[pivot_pos]) != Ordering::Equal
        {
            stats.misplaced += 1;
        }

        let Parts {
            left,
            middle,
            right,
        } = match config.partitioning {
            Partitioning::Legacy => partition_legacy(seg, pivot_pos, &mut compare),
            Partitioning::ThreeWay => partition_three_way(seg, pivot_pos, &mut compare),
        };

        if config.partitioning == Partitioning::Legacy && (left.is_empty() || right.is_empty()) {
            let dropped = left.len() + right.len();
            stats.short_circuits += 1;
            stats.dropped += dropped;
            tracing::trace!(depth, dropped, kept = middle.len(), "degenerate split");
            out.extend(middle);
            continue;
        }

        if !right.is_empty() {
            stack.push(Task::Sort(right, depth + 1));
        }
        stack.push(Task::Emit(middle));
        if !left.is_empty() {
            stack.push(Task::Sort(left, depth + 1));
        }
    }

    SortOutcome { values: out, stats }
}

// --- IMPL ---

enum Task<T> {
    Sort(Vec<T>, usize),
    Emit(Vec<T>),
}

struct Parts<T> {
    left: Vec<T>,
    middle: Vec<T>,
    right: Vec<T>,
}

/// Partitions `v[1..]` by the value at `pivot_pos`. `v[0]` always lands first in `middle`,
/// whatever its value, and an element at `pivot_pos > 0` is classified like any other.
fn partition_legacy<T, F>(v: Vec<T>, pivot_pos: usize, compare: &mut F) -> Parts<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v[pivot_pos].clone();
    let mut parts = Parts::with_capacity(v.len());

    for (i, elem) in v.into_iter().enumerate() {
        if i == 0 {
            parts.middle.push(elem);
            continue;
        }
        parts.push(elem, &pivot, compare);
    }

    parts
}

fn partition_three_way<T, F>(v: Vec<T>, pivot_pos: usize, compare: &mut F) -> Parts<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v[pivot_pos].clone();
    let mut parts = Parts::with_capacity(v.len());

    for elem in v {
        parts.push(elem, &pivot, compare);
    }

    parts
}

impl<T> Parts<T> {
    fn with_capacity(len: usize) -> Self {
        // Exact sizes are unknown, half is a decent guess for the outer parts.
        Self {
            left: Vec::with_capacity(len / 2),
            middle: Vec::new(),
            right: Vec::with_capacity(len / 2),
        }
    }

    #[inline]
    fn push<F>(&mut self, elem: T, pivot: &T, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match compare(&elem, pivot) {
            Ordering::Less => self.left.push(elem),
            Ordering::Equal => self.middle.push(elem),
            Ordering::Greater => self.right.push(elem),
        }
    }
}
