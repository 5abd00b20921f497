//! Adapters for the collaborators of the tsmock generator.
//!
//! - [`IndexResolver`] answers declaration lookups from a JSON declaration
//!   index exported by an external TypeScript tool.
//! - [`RuleRewriter`] renders resolved shapes as literal expressions, using
//!   the transformer rules of the rules module.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod index;
mod rewrite;

pub use error::{Error, Result};
pub use index::{DEFAULT_INDEX_FILE, IndexResolver};
pub use rewrite::RuleRewriter;
