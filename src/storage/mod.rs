//! On-disk word list files
//!
//! The directory layout is the contract with game runtimes: `words.txt` holds
//! valid guesses and `answers.txt` eligible secret words, one per line.

pub mod layout;
mod reader;
mod writer;

pub use layout::{ANSWERS_FILE, WORDS_FILE, answers_path, bucket_dir, words_path};
pub use reader::{parse_list, read_list_file};
pub use writer::{PersistedBucket, persist, render_list};
