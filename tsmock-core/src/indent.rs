//! Indentation units for generated code.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Indentation unit for generated code.
///
/// Only two spaces, four spaces and a single tab are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Indent {
    /// Spaces with the specified width (2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (TypeScript default).
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(4) => "    ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }

    /// Indentation text for the given nesting depth.
    pub fn repeat(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(4) => write!(f, "4"),
            Self::Spaces(_) => write!(f, "2"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for Indent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "2" | "  " => Ok(Self::Spaces(2)),
            "4" | "    " => Ok(Self::Spaces(4)),
            "tab" | "\t" => Ok(Self::Tab),
            _ => Err(format!("unknown indent '{}', expected '2', '4' or 'tab'", s)),
        }
    }
}

impl TryFrom<String> for Indent {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Indent> for String {
    fn from(indent: Indent) -> Self {
        indent.to_string()
    }
}
