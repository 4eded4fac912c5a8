//! shortpath CLI library.
//!
//! This crate provides the output formatting used by the `shortpath`
//! binary so it can be unit-tested without spawning the process.

pub mod output;
