//! Seed vocabularies for each word length
//!
//! Provides embedded seed lists compiled into the binary, plus a loader for
//! editing seeds on disk without recompiling.

mod embedded;
pub mod loader;

use crate::core::WordLength;
use std::collections::BTreeMap;

pub use embedded::{
    SEEDS, SEEDS_2, SEEDS_3, SEEDS_4, SEEDS_5, SEEDS_6, SEEDS_7, SEEDS_8, SEEDS_9, SEEDS_10,
};

/// Raw seed tokens grouped by word length
///
/// Tokens are unvalidated: they may repeat, carry mixed case or punctuation,
/// or even have the wrong length for their bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    buckets: BTreeMap<WordLength, Vec<String>>,
}

impl SeedSet {
    /// Seed set built from the embedded vocabularies
    #[must_use]
    pub fn embedded() -> Self {
        loader::seeds_from_table(SEEDS)
    }

    /// Replace the tokens for one bucket
    pub fn insert(&mut self, length: WordLength, tokens: Vec<String>) {
        self.buckets.insert(length, tokens);
    }

    /// Raw tokens for a bucket (empty if no seed data exists)
    #[must_use]
    pub fn get(&self, length: WordLength) -> &[String] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Total raw tokens across all buckets
    #[must_use]
    pub fn total_tokens(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
