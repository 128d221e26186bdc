//! Persisting buckets to disk

use super::layout::{answers_path, bucket_dir, words_path};
use crate::builder::WordBucket;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a bucket's lists were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBucket {
    pub words_path: PathBuf,
    pub answers_path: PathBuf,
}

/// Render a list as file contents: one word per line, single trailing newline
///
/// An empty list renders as a lone newline.
#[must_use]
pub fn render_list(words: &[String]) -> String {
    let mut content = words.join("\n");
    content.push('\n');
    content
}

/// Write a bucket's `words.txt` and `answers.txt`
///
/// Creates the bucket directory (and `base`) if absent. Existing files are
/// overwritten.
///
/// # Errors
///
/// Returns `Error::CreateDir` or `Error::Write` on the first filesystem failure.
pub fn persist(base: &Path, bucket: &WordBucket) -> Result<PersistedBucket> {
    let dir = bucket_dir(base, bucket.length);
    fs::create_dir_all(&dir).map_err(|source| Error::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let words_path = words_path(base, bucket.length);
    let answers_path = answers_path(base, bucket.length);

    write_list(&words_path, &bucket.words)?;
    write_list(&answers_path, &bucket.answers)?;

    info!(
        length = bucket.length.get(),
        words = bucket.word_count(),
        answers = bucket.answer_count(),
        dir = %dir.display(),
        "persisted bucket"
    );

    Ok(PersistedBucket {
        words_path,
        answers_path,
    })
}

fn write_list(path: &Path, words: &[String]) -> Result<()> {
    fs::write(path, render_list(words)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
