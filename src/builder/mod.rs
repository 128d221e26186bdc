//! Word list building
//!
//! Turns raw seed vocabularies into cleaned, sorted word lists and their
//! answer subsets. Buckets are independent, so they are built in parallel and
//! returned in ascending length order.

mod bucket;

pub use bucket::{WordBucket, build_words_for_length};

use crate::core::WordLength;
use crate::wordlists::SeedSet;
use rayon::prelude::*;

/// Build every bucket from 2 to 10 letters
///
/// Lengths without seed data produce empty buckets.
#[must_use]
pub fn build_all(seeds: &SeedSet) -> Vec<WordBucket> {
    let lengths: Vec<WordLength> = WordLength::all().collect();

    lengths
        .par_iter()
        .map(|&length| build_words_for_length(length, seeds.get(length)))
        .collect()
}
