//! Core utilities and types for the tsmock generator.
//!
//! This crate provides the leaf pieces used across the tsmock crates:
//! indentation units, the destination guard and file writer, and small
//! string helpers.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod indent;
mod utils;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, ensure_dir};
pub use indent::Indent;
// String utilities
pub use utils::{capitalize, is_identifier};
