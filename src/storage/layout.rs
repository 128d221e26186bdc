//! Output directory layout
//!
//! ```text
//! <base>/<N>letter/words.txt
//! <base>/<N>letter/answers.txt
//! ```

use crate::core::WordLength;
use std::path::{Path, PathBuf};

/// File name of the guess list inside a bucket directory
pub const WORDS_FILE: &str = "words.txt";

/// File name of the answer list inside a bucket directory
pub const ANSWERS_FILE: &str = "answers.txt";

/// Directory holding one bucket's files
#[must_use]
pub fn bucket_dir(base: &Path, length: WordLength) -> PathBuf {
    base.join(length.dir_name())
}

/// Path of a bucket's `words.txt`
#[must_use]
pub fn words_path(base: &Path, length: WordLength) -> PathBuf {
    bucket_dir(base, length).join(WORDS_FILE)
}

/// Path of a bucket's `answers.txt`
#[must_use]
pub fn answers_path(base: &Path, length: WordLength) -> PathBuf {
    bucket_dir(base, length).join(ANSWERS_FILE)
}
