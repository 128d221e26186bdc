//! Core domain types for word list generation
//!
//! Word lengths, the answer retention policy, and seed token normalization.
//! Everything here is pure; filesystem access lives in `storage`.

mod length;
mod retention;
mod token;

pub use length::{MAX_LENGTH, MIN_LENGTH, WordLength};
pub use retention::Retention;
pub use token::{TokenError, clean, normalize};
