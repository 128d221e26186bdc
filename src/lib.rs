//! Wordle Word Lists
//!
//! Generates guess and answer word lists for a multi-length (2-10 letter) Wordle game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lists::builder::build_words_for_length;
//! use wordle_lists::core::WordLength;
//!
//! let five = WordLength::new(5).unwrap();
//! let bucket = build_words_for_length(five, &["Slate", "crane", "cr4ne", "adieu", "trace"]);
//!
//! assert_eq!(bucket.words, ["adieu", "crane", "slate", "trace"]);
//! // 60% of 4 words, taken from the front of the sorted list
//! assert_eq!(bucket.answers, ["adieu", "crane"]);
//! ```

// Core domain types
pub mod core;

// Seed vocabularies
pub mod wordlists;

// Word and answer list building
pub mod builder;

// On-disk file layout
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::{Error, Result};
