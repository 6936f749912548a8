//! Ranking of per-feature candidates for the active-feature protocol.

use crate::core::types::FeatureIndex;
use crate::tree::split::result::SplitResult;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by [`SplitResult::selection_cmp`].
#[derive(Debug, Clone)]
struct RankedSplit(SplitResult);

impl PartialEq for RankedSplit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedSplit {}

impl PartialOrd for RankedSplit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedSplit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.selection_cmp(&other.0)
    }
}

/// Max-heap of candidate splits, best reduction on top.
///
/// Equal reductions rank the lower feature index first.
#[derive(Debug, Clone, Default)]
pub struct FeatureRanking {
    heap: BinaryHeap<RankedSplit>,
}

impl FeatureRanking {
    /// Creates an empty ranking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ranking with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        FeatureRanking {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Adds a candidate.
    pub fn push(&mut self, split: SplitResult) {
        self.heap.push(RankedSplit(split));
    }

    /// Number of ranked candidates.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Best candidate without removing it.
    pub fn peek(&self) -> Option<&SplitResult> {
        self.heap.peek().map(|ranked| &ranked.0)
    }

    /// Removes and returns the best candidate.
    pub fn pop(&mut self) -> Option<SplitResult> {
        self.heap.pop().map(|ranked| ranked.0)
    }

    /// Drains up to `k` candidates in descending order and returns their
    /// feature indices. Asking for more than are ranked returns them all.
    pub fn take_top_features(&mut self, k: usize) -> Vec<FeatureIndex> {
        let mut features = Vec::with_capacity(k.min(self.heap.len()));
        while features.len() < k {
            match self.pop() {
                Some(split) => features.push(split.feature),
                None => break,
            }
        }
        features
    }
}

impl Extend<SplitResult> for FeatureRanking {
    fn extend<I: IntoIterator<Item = SplitResult>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(RankedSplit));
    }
}

impl FromIterator<SplitResult> for FeatureRanking {
    fn from_iter<I: IntoIterator<Item = SplitResult>>(iter: I) -> Self {
        let mut ranking = FeatureRanking::new();
        ranking.extend(iter);
        ranking
    }
}
