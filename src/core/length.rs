//! Word length buckets
//!
//! A `WordLength` is a validated length in the supported 2..=10 range. Every
//! bucket owns one seed list and one `<N>letter/` output directory.

use super::Retention;
use crate::error::{Error, Result};
use std::fmt;

/// Shortest supported word length
pub const MIN_LENGTH: usize = 2;

/// Longest supported word length
pub const MAX_LENGTH: usize = 10;

/// A supported word length (2-10 letters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordLength(usize);

impl WordLength {
    /// Create a word length, validating the supported range
    ///
    /// # Errors
    /// Returns `Error::InvalidLength` if `length` is outside 2..=10.
    ///
    /// # Examples
    /// ```
    /// use wordle_lists::core::WordLength;
    ///
    /// let five = WordLength::new(5).unwrap();
    /// assert_eq!(five.get(), 5);
    ///
    /// assert!(WordLength::new(1).is_err());
    /// assert!(WordLength::new(11).is_err());
    /// ```
    pub fn new(length: usize) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::InvalidLength(length));
        }
        Ok(Self(length))
    }

    /// All supported lengths in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_LENGTH..=MAX_LENGTH).map(Self)
    }

    /// Get the length as a plain number
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Name of the output directory for this bucket (e.g. `5letter`)
    #[must_use]
    pub fn dir_name(self) -> String {
        format!("{}letter", self.0)
    }

    /// Answer retention policy for this bucket
    #[inline]
    #[must_use]
    pub const fn retention(self) -> Retention {
        Retention::for_length(self)
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_valid_range() {
        for n in MIN_LENGTH..=MAX_LENGTH {
            assert_eq!(WordLength::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn length_out_of_range() {
        assert!(matches!(WordLength::new(0), Err(Error::InvalidLength(0))));
        assert!(matches!(WordLength::new(1), Err(Error::InvalidLength(1))));
        assert!(matches!(WordLength::new(11), Err(Error::InvalidLength(11))));
    }

    #[test]
    fn all_lengths_ascending() {
        let lengths: Vec<usize> = WordLength::all().map(WordLength::get).collect();
        assert_eq!(lengths, vec![2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn dir_name_format() {
        assert_eq!(WordLength::new(2).unwrap().dir_name(), "2letter");
        assert_eq!(WordLength::new(10).unwrap().dir_name(), "10letter");
    }

    #[test]
    fn display_respects_width() {
        let five = WordLength::new(5).unwrap();
        assert_eq!(format!("{five}"), "5");
        assert_eq!(format!("{five:>2}"), " 5");
    }

    #[test]
    fn lengths_order_numerically() {
        let nine = WordLength::new(9).unwrap();
        let ten = WordLength::new(10).unwrap();
        assert!(nine < ten);
    }
}
