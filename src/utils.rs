//! Outer-surface utilities for lsr.
//!
//! This module holds the [cli] submodule, which owns flag parsing and the
//! help/usage text. Everything here sits outside the listing core: it turns
//! process arguments into [Options](crate::core::Options) and paths, and
//! nothing in `core` depends on it.

pub mod cli;
