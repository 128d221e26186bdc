//! Per-length word and answer lists

use crate::core::{WordLength, clean};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The finished lists for one word length
///
/// `words` is every acceptable guess; `answers` is the prefix of `words`
/// eligible as a secret word. Both are sorted ascending without duplicates,
/// and every entry is exactly `length` lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBucket {
    pub length: WordLength,
    pub words: Vec<String>,
    pub answers: Vec<String>,
}

impl WordBucket {
    /// Number of guessable words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of answer words
    #[inline]
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

/// Build the word and answer lists for one length from raw seed tokens
///
/// # Examples
/// ```
/// use wordle_lists::builder::build_words_for_length;
/// use wordle_lists::core::WordLength;
///
/// let two = WordLength::new(2).unwrap();
/// let bucket = build_words_for_length(two, &["an", "AS", "at", "an"]);
/// assert_eq!(bucket.words, ["an", "as", "at"]);
/// assert_eq!(bucket.answers, bucket.words);
/// ```
#[must_use]
pub fn build_words_for_length<S: AsRef<str>>(length: WordLength, raw: &[S]) -> WordBucket {
    let (matching, mismatched): (Vec<String>, Vec<String>) = clean(raw)
        .into_iter()
        .partition(|word| word.len() == length.get());

    if !mismatched.is_empty() {
        debug!(
            length = length.get(),
            dropped = mismatched.len(),
            "dropping seed words whose length disagrees with their bucket"
        );
        for word in &mismatched {
            debug!(length = length.get(), word = word.as_str(), "wrong length for bucket");
        }
    }

    let unique: FxHashSet<String> = matching.into_iter().collect();
    let mut words: Vec<String> = unique.into_iter().collect();
    words.sort_unstable();

    // Prefix of the sorted list, not a sample
    let count = length.retention().answer_count(words.len());
    let mut answers = words[..count].to_vec();
    answers.sort_unstable();
    answers.dedup();

    WordBucket {
        length,
        words,
        answers,
    }
}
