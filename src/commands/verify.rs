//! Verify command
//!
//! Re-reads a generated tree and checks every list against the file contract:
//! correct word length, lowercase letters only, sorted, no duplicates, answers
//! drawn from words as the policy prefix.

use crate::core::WordLength;
use crate::error::Result;
use crate::storage::{
    ANSWERS_FILE, WORDS_FILE, answers_path, parse_list, read_list_file, words_path,
};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which of a bucket's two files a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFile {
    Words,
    Answers,
}

impl fmt::Display for ListFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Words => write!(f, "{WORDS_FILE}"),
            Self::Answers => write!(f, "{ANSWERS_FILE}"),
        }
    }
}

/// A broken contract rule in one bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingFile(ListFile),
    InvalidEncoding(ListFile),
    MissingTrailingNewline(ListFile),
    WrongLength { file: ListFile, word: String },
    NotLowercaseAlphabetic { file: ListFile, word: String },
    Duplicate { file: ListFile, word: String },
    OutOfOrder { file: ListFile, word: String },
    AnswerNotInWords(String),
    NotPolicyPrefix { expected: usize, actual: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(file) => write!(f, "{file} is missing"),
            Self::InvalidEncoding(file) => write!(f, "{file} is not valid UTF-8"),
            Self::MissingTrailingNewline(file) => {
                write!(f, "{file} does not end with a newline")
            }
            Self::WrongLength { file, word } => {
                write!(f, "{file}: '{word}' has the wrong length")
            }
            Self::NotLowercaseAlphabetic { file, word } => {
                write!(f, "{file}: '{word}' is not lowercase letters only")
            }
            Self::Duplicate { file, word } => write!(f, "{file}: '{word}' appears twice"),
            Self::OutOfOrder { file, word } => write!(f, "{file}: '{word}' is out of order"),
            Self::AnswerNotInWords(word) => {
                write!(f, "{ANSWERS_FILE}: '{word}' is not in {WORDS_FILE}")
            }
            Self::NotPolicyPrefix { expected, actual } => write!(
                f,
                "{ANSWERS_FILE} should be the first {expected} words, found {actual} answers"
            ),
        }
    }
}

/// Verification result for one bucket
#[derive(Debug, Clone)]
pub struct BucketCheck {
    pub length: WordLength,
    pub words: usize,
    pub answers: usize,
    pub violations: Vec<Violation>,
}

/// Verification result for a whole output tree
#[derive(Debug)]
pub struct VerifyReport {
    pub output_dir: PathBuf,
    pub buckets: Vec<BucketCheck>,
}

impl VerifyReport {
    /// True if no bucket has violations
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.buckets.iter().all(|b| b.violations.is_empty())
    }

    /// Total violations across all buckets
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.buckets.iter().map(|b| b.violations.len()).sum()
    }
}

/// Check one list's entries; appends to `violations`
fn check_entries(
    file: ListFile,
    length: WordLength,
    entries: &[&str],
    violations: &mut Vec<Violation>,
) {
    let mut previous: Option<&str> = None;

    for &word in entries {
        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            violations.push(Violation::NotLowercaseAlphabetic {
                file,
                word: word.to_string(),
            });
        } else if word.len() != length.get() {
            violations.push(Violation::WrongLength {
                file,
                word: word.to_string(),
            });
        }

        if let Some(prev) = previous {
            if word == prev {
                violations.push(Violation::Duplicate {
                    file,
                    word: word.to_string(),
                });
            } else if word < prev {
                violations.push(Violation::OutOfOrder {
                    file,
                    word: word.to_string(),
                });
            }
        }
        previous = Some(word);
    }
}

/// Check a bucket's file contents against the contract
///
/// `None` means the file is missing. Cross checks between the two lists only
/// run when both files were read and decoded.
#[must_use]
pub fn check_bucket(
    length: WordLength,
    words: Option<&[u8]>,
    answers: Option<&[u8]>,
) -> BucketCheck {
    let mut violations = Vec::new();

    let mut lists: [Vec<&str>; 2] = [Vec::new(), Vec::new()];
    let mut readable = true;
    for (slot, (file, content)) in lists
        .iter_mut()
        .zip([(ListFile::Words, words), (ListFile::Answers, answers)])
    {
        let Some(bytes) = content else {
            violations.push(Violation::MissingFile(file));
            readable = false;
            continue;
        };
        let Ok(content) = std::str::from_utf8(bytes) else {
            violations.push(Violation::InvalidEncoding(file));
            readable = false;
            continue;
        };
        if !content.ends_with('\n') {
            violations.push(Violation::MissingTrailingNewline(file));
        }
        *slot = parse_list(content);
        check_entries(file, length, slot, &mut violations);
    }
    let [word_list, answer_list] = lists;

    if readable {
        let known: FxHashSet<&str> = word_list.iter().copied().collect();
        for &answer in &answer_list {
            if !known.contains(answer) {
                violations.push(Violation::AnswerNotInWords(answer.to_string()));
            }
        }

        let expected = length.retention().answer_count(word_list.len());
        if answer_list.len() != expected || answer_list[..] != word_list[..expected] {
            violations.push(Violation::NotPolicyPrefix {
                expected,
                actual: answer_list.len(),
            });
        }
    }

    BucketCheck {
        length,
        words: word_list.len(),
        answers: answer_list.len(),
        violations,
    }
}

/// Verify every bucket under `base`
///
/// # Errors
///
/// Returns an error if an existing list file cannot be read. Files that read
/// but fail to decode are reported as violations instead.
pub fn run_verify(base: &Path) -> Result<VerifyReport> {
    let mut buckets = Vec::new();

    for length in WordLength::all() {
        let words = read_list_file(&words_path(base, length))?;
        let answers = read_list_file(&answers_path(base, length))?;

        let check = check_bucket(length, words.as_deref(), answers.as_deref());
        if check.violations.is_empty() {
            debug!(length = length.get(), "bucket verified");
        } else {
            warn!(
                length = length.get(),
                violations = check.violations.len(),
                "bucket failed verification"
            );
        }
        buckets.push(check);
    }

    Ok(VerifyReport {
        output_dir: base.to_path_buf(),
        buckets,
    })
}
