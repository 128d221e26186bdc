//! Embedded seed vocabularies
//!
//! Seed tokens compiled into the binary at build time from `seeds/<N>letter.txt`.

// Include generated seed lists from build script
include!(concat!(env!("OUT_DIR"), "/seeds.rs"));
