//! List statistics
//!
//! Per-length word and answer counts, computed from built buckets.

use crate::builder::{WordBucket, build_all};
use crate::core::WordLength;
use crate::wordlists::SeedSet;

/// Counts for one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketSummary {
    pub length: WordLength,
    pub words: usize,
    pub answers: usize,
}

impl From<&WordBucket> for BucketSummary {
    fn from(bucket: &WordBucket) -> Self {
        Self {
            length: bucket.length,
            words: bucket.word_count(),
            answers: bucket.answer_count(),
        }
    }
}

/// Counts for every bucket, in ascending length order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListStatistics {
    pub buckets: Vec<BucketSummary>,
}

impl ListStatistics {
    /// Summarize built buckets
    #[must_use]
    pub fn from_buckets(buckets: &[WordBucket]) -> Self {
        Self {
            buckets: buckets.iter().map(BucketSummary::from).collect(),
        }
    }

    /// Total words across all lengths
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.buckets.iter().map(|b| b.words).sum()
    }

    /// Total answers across all lengths
    #[must_use]
    pub fn total_answers(&self) -> usize {
        self.buckets.iter().map(|b| b.answers).sum()
    }
}

/// Build every bucket in memory and count the results
///
/// Nothing is written to disk.
#[must_use]
pub fn run_stats(seeds: &SeedSet) -> ListStatistics {
    ListStatistics::from_buckets(&build_all(seeds))
}
