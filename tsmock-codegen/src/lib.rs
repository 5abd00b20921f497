//! Mock file assembly for the tsmock generator.
//!
//! Given a declaration resolver and a rewriter (see [`resolver`]), this crate
//! turns one named type into a ready-to-write TypeScript mock file.
//!
//! # Module Organization
//!
//! - [`paths`] - Relative import paths and mock file locations
//! - [`imports`] - Import aggregation and deduplication
//! - [`ast`] - TypeScript import and const builders
//! - [`mock_file`] - Assembly of header, imports and the mock constant
//! - [`format`] - Pretty-printer for single-line literal expressions
//! - [`resolver`] - Contracts of the declaration resolver and rewriter
//! - [`generator`] - The generation pipeline tying it all together

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod ast;
mod diagnostic;
mod error;
pub mod format;
pub mod generator;
pub mod imports;
pub mod mock_file;
pub mod paths;
pub mod resolver;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use format::{FormatError, prettify};
pub use generator::{MockGenerator, MockPlan, Outcome, Selection};
pub use imports::{ImportSet, aggregate_imports};
pub use mock_file::MockFile;
pub use paths::{mock_file_path, normalize, relative_import_path};
pub use resolver::{DeclarationResolver, ResolveError, ResolveOptions, RewriteError, Rewriter};
