//! Answer retention policy
//!
//! Answers are a prefix of the sorted word list. The prefix size is a
//! length-dependent fraction of the list, floored, and never less than one
//! word when the list is non-empty.

use super::WordLength;

/// How much of a bucket's word list is kept as answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Every word is an answer (2-4 letters)
    All,
    /// `floor(total * numerator / denominator)`, clamped to at least 1
    Fraction { numerator: usize, denominator: usize },
}

impl Retention {
    /// Retention policy for a word length
    #[must_use]
    pub const fn for_length(length: WordLength) -> Self {
        match length.get() {
            ..=4 => Self::All,
            5 => Self::Fraction {
                numerator: 6,
                denominator: 10,
            },
            6..=8 => Self::Fraction {
                numerator: 4,
                denominator: 10,
            },
            _ => Self::Fraction {
                numerator: 25,
                denominator: 100,
            },
        }
    }

    /// Number of answers to keep out of `total` words
    ///
    /// # Examples
    /// ```
    /// use wordle_lists::core::{Retention, WordLength};
    ///
    /// let five = Retention::for_length(WordLength::new(5).unwrap());
    /// assert_eq!(five.answer_count(400), 240);
    /// assert_eq!(five.answer_count(1), 1);
    /// assert_eq!(five.answer_count(0), 0);
    /// ```
    #[must_use]
    pub const fn answer_count(self, total: usize) -> usize {
        match self {
            Self::All => total,
            Self::Fraction { .. } if total == 0 => 0,
            Self::Fraction {
                numerator,
                denominator,
            } => {
                let count = total * numerator / denominator;
                if count == 0 { 1 } else { count }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retention(length: usize) -> Retention {
        WordLength::new(length).unwrap().retention()
    }

    #[test]
    fn short_lengths_keep_everything() {
        for length in 2..=4 {
            assert_eq!(retention(length), Retention::All);
            assert_eq!(retention(length).answer_count(0), 0);
            assert_eq!(retention(length).answer_count(1), 1);
            assert_eq!(retention(length).answer_count(347), 347);
        }
    }

    #[test]
    fn five_letters_keep_sixty_percent() {
        assert_eq!(retention(5).answer_count(400), 240);
        assert_eq!(retention(5).answer_count(608), 364);
        assert_eq!(retention(5).answer_count(10), 6);
        assert_eq!(retention(5).answer_count(9), 5);
    }

    #[test]
    fn mid_lengths_keep_forty_percent() {
        for length in 6..=8 {
            assert_eq!(retention(length).answer_count(100), 40);
            assert_eq!(retention(length).answer_count(7), 2);
        }
    }

    #[test]
    fn long_lengths_keep_a_quarter() {
        for length in 9..=10 {
            assert_eq!(retention(length).answer_count(100), 25);
            assert_eq!(retention(length).answer_count(7), 1);
            assert_eq!(retention(length).answer_count(8), 2);
        }
    }

    #[test]
    fn tiny_lists_keep_at_least_one() {
        for length in 5..=10 {
            assert_eq!(retention(length).answer_count(1), 1);
            assert_eq!(retention(length).answer_count(2), 1);
            assert_eq!(retention(length).answer_count(3), 1);
        }
    }

    #[test]
    fn empty_list_keeps_nothing() {
        for length in 2..=10 {
            assert_eq!(retention(length).answer_count(0), 0);
        }
    }
}
