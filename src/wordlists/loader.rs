//! Seed loading utilities
//!
//! Loads seed vocabularies from a directory laid out like `seeds/`, or from
//! the embedded constants.

use super::SeedSet;
use crate::core::WordLength;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the seed file for a bucket inside `dir`
#[must_use]
pub fn seed_path(dir: &Path, length: WordLength) -> PathBuf {
    dir.join(format!("{}.txt", length.dir_name()))
}

/// Load seed tokens from a file
///
/// Tokens are separated by any whitespace. A missing file yields `None`.
///
/// # Errors
///
/// Returns `Error::SeedRead` if the file exists but cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>> {
    let path = path.as_ref();

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::SeedRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(Some(
        content.split_whitespace().map(str::to_string).collect(),
    ))
}

/// Load every bucket's seed file from a directory
///
/// Missing files leave their bucket empty.
///
/// # Errors
///
/// Returns `Error::SeedRead` if any existing seed file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_lists::wordlists::loader::load_from_dir;
///
/// let seeds = load_from_dir("seeds").unwrap();
/// println!("Loaded {} seed tokens", seeds.total_tokens());
/// ```
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<SeedSet> {
    let dir = dir.as_ref();
    let mut seeds = SeedSet::default();

    for length in WordLength::all() {
        let path = seed_path(dir, length);
        match load_from_file(&path)? {
            Some(tokens) => {
                debug!(
                    length = length.get(),
                    tokens = tokens.len(),
                    path = %path.display(),
                    "loaded seed file"
                );
                seeds.insert(length, tokens);
            }
            None => debug!(
                length = length.get(),
                path = %path.display(),
                "no seed file, bucket left empty"
            ),
        }
    }

    Ok(seeds)
}

/// Convert an embedded seed table into a seed set
///
/// Entries whose length is outside 2..=10 are ignored.
#[must_use]
pub fn seeds_from_table(table: &[(usize, &[&str])]) -> SeedSet {
    let mut seeds = SeedSet::default();

    for &(length, tokens) in table {
        if let Ok(length) = WordLength::new(length) {
            seeds.insert(length, tokens.iter().map(|&s| s.to_string()).collect());
        }
    }

    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn length(n: usize) -> WordLength {
        WordLength::new(n).unwrap()
    }

    #[test]
    fn seed_path_uses_bucket_name() {
        let path = seed_path(Path::new("seeds"), length(7));
        assert_eq!(path, Path::new("seeds").join("7letter.txt"));
    }

    #[test]
    fn load_from_file_splits_on_whitespace() -> std::io::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("3letter.txt");
        fs::write(&path, "cat dog\n  owl\n\n\tFox\n")?;

        let tokens = load_from_file(&path).unwrap().unwrap();
        assert_eq!(tokens, vec!["cat", "dog", "owl", "Fox"]);
        Ok(())
    }

    #[test]
    fn load_from_file_missing_is_none() -> std::io::Result<()> {
        let dir = tempdir()?;
        let tokens = load_from_file(dir.path().join("nope.txt")).unwrap();
        assert!(tokens.is_none());
        Ok(())
    }

    #[test]
    fn load_from_file_directory_is_error() -> std::io::Result<()> {
        let dir = tempdir()?;
        let result = load_from_file(dir.path());
        assert!(matches!(result, Err(Error::SeedRead { .. })));
        Ok(())
    }

    #[test]
    fn load_from_dir_fills_present_buckets() -> std::io::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("2letter.txt"), "an AS at an")?;
        fs::write(dir.path().join("5letter.txt"), "crane\nslate")?;

        let seeds = load_from_dir(dir.path()).unwrap();
        assert_eq!(seeds.get(length(2)), ["an", "AS", "at", "an"]);
        assert_eq!(seeds.get(length(5)), ["crane", "slate"]);
        assert!(seeds.get(length(3)).is_empty());
        assert_eq!(seeds.total_tokens(), 6);
        Ok(())
    }

    #[test]
    fn seeds_from_table_skips_unsupported_lengths() {
        let table: &[(usize, &[&str])] = &[(1, &["a"]), (2, &["an", "at"]), (11, &["x"])];
        let seeds = seeds_from_table(table);

        assert_eq!(seeds.get(length(2)), ["an", "at"]);
        assert_eq!(seeds.total_tokens(), 2);
    }
}
