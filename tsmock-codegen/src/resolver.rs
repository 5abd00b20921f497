//! Contracts of the external collaborators.
//!
//! The generation core never inspects source files or structural types on its
//! own. A [`DeclarationResolver`] finds and resolves declarations, a
//! [`Rewriter`] turns a resolved shape into a literal expression.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tsmock_config::{Rules, Transformers};
use tsmock_ir::{Declaration, EnumRef, TypeShape};

/// Options passed to the resolver for every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Fail when a referenced type cannot be found instead of leaving it as
    /// a reference.
    pub break_on_unresolved_imports: bool,
    /// Type names that must stay references.
    pub do_not_resolve: Vec<String>,
}

impl ResolveOptions {
    /// Options used for generation requests: strict, with the exclusions of
    /// the rules module.
    pub fn from_rules(rules: &Rules) -> Self {
        Self {
            break_on_unresolved_imports: true,
            do_not_resolve: rules.do_not_resolve.clone(),
        }
    }

    /// Returns true if `name` must not be resolved.
    pub fn skips(&self, name: &str) -> bool {
        self.do_not_resolve.iter().any(|n| n == name)
    }
}

/// Errors reported by a [`DeclarationResolver`].
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("'{path}' is not known to the resolver")]
    #[diagnostic(
        code(tsmock::unknown_file),
        help("regenerate the declaration index so it includes this file")
    )]
    UnknownFile { path: PathBuf },

    #[error("no declaration named '{identifier}' in '{path}'")]
    #[diagnostic(code(tsmock::unknown_declaration))]
    UnknownDeclaration { identifier: String, path: PathBuf },

    #[error("cannot resolve '{name}' referenced from '{path}'")]
    #[diagnostic(
        code(tsmock::unresolved),
        help("add '{name}' to do_not_resolve to keep it as a reference")
    )]
    Unresolved { name: String, path: PathBuf },

    #[error("failed to load '{path}'")]
    #[diagnostic(code(tsmock::load))]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Error reported by a [`Rewriter`].
#[derive(Debug, Error, Diagnostic)]
#[error("cannot build a mock value for {kind}: {reason}")]
#[diagnostic(code(tsmock::rewrite))]
pub struct RewriteError {
    pub kind: String,
    pub reason: String,
}

/// Finds declarations and resolves their structural types.
pub trait DeclarationResolver {
    /// Top-level type declarations of `source`, in source order.
    ///
    /// An empty list is a valid answer.
    fn list_declarations(
        &self,
        source: &Path,
        options: &ResolveOptions,
    ) -> Result<Vec<Declaration>, ResolveError>;

    /// Resolve `identifier` declared in `source`, following imports.
    fn resolve(
        &self,
        source: &Path,
        identifier: &str,
        options: &ResolveOptions,
    ) -> Result<Declaration, ResolveError>;

    /// Look up a declaration by name as seen from the file `from`.
    fn find_declaration(&self, name: &str, from: &Path) -> Option<Declaration>;

    /// File `declaration` was found in, as seen from the file `from`.
    fn source_path_of(&self, declaration: &Declaration, from: &Path) -> Option<PathBuf>;

    /// Enum types reachable from `ty`, in scan order.
    fn scan_enum_references(&self, ty: &TypeShape) -> Vec<EnumRef> {
        ty.enum_refs()
    }
}

/// Turns a structural type into a single-line literal expression.
pub trait Rewriter {
    fn rewrite(&self, ty: &TypeShape, transformers: &Transformers)
    -> Result<String, RewriteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_rules() {
        let rules = Rules {
            do_not_resolve: vec!["Date".to_string()],
            ..Rules::default()
        };

        let options = ResolveOptions::from_rules(&rules);

        assert!(options.break_on_unresolved_imports);
        assert!(options.skips("Date"));
        assert!(!options.skips("User"));
    }
}
