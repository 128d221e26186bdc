//! Reading persisted lists back

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Read a list file's raw bytes
///
/// Returns `None` if the file does not exist. Decoding is left to the caller
/// so a file with a bad encoding can be reported rather than aborting.
///
/// # Errors
///
/// Returns `Error::Read` if the file exists but cannot be read.
pub fn read_list_file(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Split list contents into entries
///
/// Inverse of `render_list`: strips the single trailing newline, and a lone
/// newline means an empty list.
#[must_use]
pub fn parse_list(content: &str) -> Vec<&str> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    if body.is_empty() {
        Vec::new()
    } else {
        body.split('\n').collect()
    }
}
