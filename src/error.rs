//! Error types for word list generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for building and persisting word lists
#[derive(Error, Debug)]
pub enum Error {
    #[error("Word length must be between 2 and 10, got {0}")]
    InvalidLength(usize),

    #[error("Failed to read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid progress bar template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

/// Result type that uses the crate error type
pub type Result<T> = std::result::Result<T, Error>;
