//! Import requirements of a generated file.

use std::path::PathBuf;

/// A declaration the generated file must import.
///
/// Two requirements are the same import when they share `source` and
/// `identifier`; the `default` flag only affects how the clause is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportRequirement {
    /// Imported name.
    pub identifier: String,
    /// Whether the name is the default export of `source`.
    pub default: bool,
    /// File the declaration lives in.
    pub source: PathBuf,
}

impl ImportRequirement {
    pub fn new(identifier: impl Into<String>, default: bool, source: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            default,
            source: source.into(),
        }
    }
}
