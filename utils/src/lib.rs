//! Filesystem helpers shared by the Beacon binary and its tests.
//!
//! - **`output`**: crash-safe artifact writes (temp + rename)

pub mod output;

pub use output::{OutputOptions, SyncPolicy, write_output, write_output_with_options};
