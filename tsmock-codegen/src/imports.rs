//! Import aggregation for mock files.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tsmock_ir::{Declaration, EnumRef, ImportRequirement};

use crate::{Diagnostic, paths::normalize, resolver::DeclarationResolver};

const PHASE: &str = "imports";

/// Import requirements, deduplicated by `(source, identifier)`.
///
/// Sources are compared after lexical normalization, so `src/a/../role.ts`
/// and `src/role.ts` are the same file. Maintains insertion order for
/// deterministic output.
///
/// # Example
///
/// ```
/// use tsmock_codegen::ImportSet;
/// use tsmock_ir::ImportRequirement;
///
/// let mut imports = ImportSet::new();
/// assert!(imports.insert(ImportRequirement::new("User", false, "/src/user.ts")));
/// assert!(imports.insert(ImportRequirement::new("Role", false, "/src/role.ts")));
/// assert!(!imports.insert(ImportRequirement::new("User", true, "/src/user.ts")));
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    entries: IndexMap<(PathBuf, String), ImportRequirement>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement. Returns false (and keeps the first entry) if the
    /// same `(source, identifier)` pair is already present.
    pub fn insert(&mut self, requirement: ImportRequirement) -> bool {
        let key = (normalize(&requirement.source), requirement.identifier.clone());
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, requirement);
        true
    }

    /// Iterate over requirements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportRequirement> {
        self.entries.values()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<ImportRequirement> {
        self.entries.into_values().collect()
    }
}

/// Collect the imports a mock of `primary` needs.
///
/// The first entry is always `primary` itself, imported from
/// `primary_source`. Each enum of `enum_refs` follows in order, provided the
/// resolver knows its declaration and source file; unknown enums are skipped
/// with a warning and never fail the request. Enums are looked up as seen
/// from `primary_source`.
pub fn aggregate_imports<R>(
    primary: &Declaration,
    primary_source: &Path,
    enum_refs: &[EnumRef],
    resolver: &R,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<ImportRequirement>
where
    R: DeclarationResolver + ?Sized,
{
    let mut imports = ImportSet::new();
    imports.insert(ImportRequirement::new(
        &primary.identifier,
        primary.default,
        primary_source,
    ));

    for enum_ref in enum_refs {
        let Some(declaration) = resolver.find_declaration(&enum_ref.name, primary_source) else {
            tracing::warn!(name = %enum_ref.name, "enum declaration not found, import skipped");
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!("enum '{}' could not be found, import skipped", enum_ref.name),
                )
                .at(&primary.identifier),
            );
            continue;
        };

        let Some(source) = resolver.source_path_of(&declaration, primary_source) else {
            tracing::warn!(name = %enum_ref.name, "enum source file unknown, import skipped");
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "source file of enum '{}' is unknown, import skipped",
                        enum_ref.name
                    ),
                )
                .at(&primary.identifier),
            );
            continue;
        };

        let requirement =
            ImportRequirement::new(&declaration.identifier, declaration.default, source);
        if !imports.insert(requirement) {
            tracing::debug!(name = %enum_ref.name, "duplicate import omitted");
            diagnostics.push(
                Diagnostic::info(PHASE, format!("'{}' is already imported", enum_ref.name))
                    .at(&primary.identifier),
            );
        }
    }

    imports.into_vec()
}
