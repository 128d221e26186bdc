//! Generate command
//!
//! Builds every bucket and writes `words.txt`/`answers.txt` for lengths 2-10.

use super::stats::ListStatistics;
use crate::builder::build_all;
use crate::error::Result;
use crate::storage::persist;
use crate::wordlists::SeedSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Options for a generate run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    pub show_progress: bool,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            show_progress: false,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Result of a generate run
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub stats: ListStatistics,
    pub duration: Duration,
}

/// Build all buckets and persist them under the configured output directory
///
/// Buckets are written in ascending length order. The first filesystem
/// failure aborts the run; buckets already written stay on disk.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or a list cannot be written.
pub fn run_generate(seeds: &SeedSet, config: &GenerateConfig) -> Result<GenerateReport> {
    let start = Instant::now();
    let buckets = build_all(seeds);

    let pb = if config.show_progress {
        ProgressBar::new(buckets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")?
            .progress_chars("█▓▒░"),
    );

    for bucket in &buckets {
        pb.set_message(format!("{}-letter", bucket.length));
        persist(&config.output_dir, bucket)?;
        pb.inc(1);
    }

    pb.finish_and_clear();

    let stats = ListStatistics::from_buckets(&buckets);
    info!(
        words = stats.total_words(),
        answers = stats.total_answers(),
        output = %config.output_dir.display(),
        "generated word lists"
    );

    Ok(GenerateReport {
        output_dir: config.output_dir.clone(),
        stats,
        duration: start.elapsed(),
    })
}
