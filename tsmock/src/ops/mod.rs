//! Core operations.
//!
//! This module contains the business logic for tsmock commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use tsmock_config::{Error, Rules, RulesFile};

pub use check::check;
pub use generate::generate;

/// Load the rules module at `explicit`, or the one found below `root`.
///
/// Without an explicit path a missing rules module is not an error: the
/// default rules (no header, no transformers) apply.
pub fn load_rules(explicit: Option<&Path>, root: &Path) -> tsmock_config::Result<Rules> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match RulesFile::find(root) {
            Ok(path) => path,
            Err(e) if matches!(*e, Error::RulesNotFound { .. }) => {
                tracing::info!(root = %root.display(), "no rules module found, using defaults");
                return Ok(Rules::default());
            }
            Err(e) => return Err(e),
        },
    };

    Ok(RulesFile::open(path)?.rules().clone())
}
