//! TypeScript import builder.

use tsmock_ir::ImportRequirement;

/// A single-binding TypeScript import clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    name: String,
    from: String,
    default: bool,
}

impl Import {
    /// `import { <name> } from "<from>"`
    pub fn named(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            default: false,
        }
    }

    /// `import <name> from "<from>"`
    pub fn default_export(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            default: true,
            ..Self::named(name, from)
        }
    }

    /// Build the clause for a requirement imported through module specifier `from`.
    pub fn from_requirement(requirement: &ImportRequirement, from: impl Into<String>) -> Self {
        if requirement.default {
            Self::default_export(&requirement.identifier, from)
        } else {
            Self::named(&requirement.identifier, from)
        }
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        if self.default {
            format!("import {} from \"{}\"", self.name, self.from)
        } else {
            format!("import {{ {} }} from \"{}\"", self.name, self.from)
        }
    }
}
