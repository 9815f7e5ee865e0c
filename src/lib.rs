//! Internal library crate for lsr.
//!
//! The shipped application is the `lsr` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `lsr` binary and is not considered a library for external use.

pub mod core;
pub mod utils;
