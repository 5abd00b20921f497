//! Named type declarations.

use serde::{Deserialize, Serialize};

use crate::{EnumRef, TypeShape};

/// A named type definition in a source file.
///
/// Identifiers are unique within their source file. The `ty` field carries the
/// resolved structural type once the declaration went through a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Name of the declaration (e.g. `User`).
    pub identifier: String,
    /// Whether this is the file's default export.
    #[serde(default)]
    pub default: bool,
    /// Structural type of the declaration.
    #[serde(rename = "type")]
    pub ty: TypeShape,
}

impl Declaration {
    pub fn new(identifier: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            identifier: identifier.into(),
            default: false,
            ty,
        }
    }

    /// Mark this declaration as the default export of its file.
    pub fn default_export(mut self) -> Self {
        self.default = true;
        self
    }

    /// Returns true if the declaration itself is an enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.ty, TypeShape::Enum { .. })
    }

    /// Enum types reachable from this declaration's structure.
    pub fn enum_refs(&self) -> Vec<EnumRef> {
        self.ty.enum_refs()
    }
}
