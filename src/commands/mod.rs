//! Command implementations

pub mod generate;
pub mod stats;
pub mod verify;

pub use generate::{GenerateConfig, GenerateReport, run_generate};
pub use stats::{BucketSummary, ListStatistics, run_stats};
pub use verify::{BucketCheck, ListFile, VerifyReport, Violation, check_bucket, run_verify};
