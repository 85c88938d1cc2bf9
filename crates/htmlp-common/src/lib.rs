//! Common utilities for the htmlp tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and its CLI:
//! - **Warning System** - deduplicated, colored terminal output for recoverable problems

pub mod warning;
