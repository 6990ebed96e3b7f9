//! Core utilities for the tagen binding generator.
//!
//! This crate provides the file output primitives and the owned string
//! casing helpers used across the tagen crates.

mod file;
mod utils;

// File operations
pub use file::{File, GENERATED_NOTICE, GeneratedFile, WriteResult};
// String utilities
pub use utils::{is_c_identifier, starts_with_word, to_identifier, to_upper_first};
