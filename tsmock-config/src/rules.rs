//! The rules module: transformer rules, header and resolution exclusions.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tsmock_core::is_identifier;

use crate::{Error, Result, SourceContext, validate::find_value_span};

/// Location of the rules module relative to the project root.
pub const RULES_PATH: &str = ".tsmock/rules.toml";

/// Shape kinds a transformer can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformerKind {
    String,
    Number,
    Boolean,
    #[serde(rename = "bigint")]
    BigInt,
    Null,
    Undefined,
    Any,
    Unknown,
    Literal,
    Object,
    Array,
    Tuple,
    Union,
    Enum,
    Reference,
}

impl TransformerKind {
    /// Returns the kind as it appears in rules files and shape tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformerKind::String => "string",
            TransformerKind::Number => "number",
            TransformerKind::Boolean => "boolean",
            TransformerKind::BigInt => "bigint",
            TransformerKind::Null => "null",
            TransformerKind::Undefined => "undefined",
            TransformerKind::Any => "any",
            TransformerKind::Unknown => "unknown",
            TransformerKind::Literal => "literal",
            TransformerKind::Object => "object",
            TransformerKind::Array => "array",
            TransformerKind::Tuple => "tuple",
            TransformerKind::Union => "union",
            TransformerKind::Enum => "enum",
            TransformerKind::Reference => "reference",
        }
    }

    /// Whether rules of this kind may filter on a type name.
    pub fn is_named(&self) -> bool {
        matches!(self, TransformerKind::Enum | TransformerKind::Reference)
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single transformer rule.
///
/// The rule applies to shapes of `kind`, optionally restricted to object
/// fields called `field` and, for enums and references, to the type `name`.
/// `value` is inserted verbatim as the mock value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transformer {
    pub kind: TransformerKind,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub value: String,
}

impl Transformer {
    pub fn new(kind: TransformerKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            name: None,
            value: value.into(),
        }
    }

    /// Restrict the rule to fields with this name.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Restrict the rule to the enum or reference with this name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check whether this rule applies.
    ///
    /// `name` is the enum/reference name of the shape (if any), `field` the
    /// object field the value is generated for (if any).
    pub fn applies_to(&self, kind: &str, name: Option<&str>, field: Option<&str>) -> bool {
        self.kind.as_str() == kind
            && self.field.as_deref().is_none_or(|f| Some(f) == field)
            && self.name.as_deref().is_none_or(|n| Some(n) == name)
    }
}

/// Ordered transformer rules; the first applicable rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Transformers(Vec<Transformer>);

impl Transformers {
    pub fn new(rules: impl IntoIterator<Item = Transformer>) -> Self {
        Self(rules.into_iter().collect())
    }

    /// Find the first rule that applies.
    pub fn find(
        &self,
        kind: &str,
        name: Option<&str>,
        field: Option<&str>,
    ) -> Option<&Transformer> {
        self.0.iter().find(|rule| rule.applies_to(kind, name, field))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transformer> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parsed rules module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rules {
    /// Text placed above the imports of every generated file.
    #[serde(default)]
    pub header: Option<String>,
    /// Type names the resolver must leave as references.
    #[serde(default)]
    pub do_not_resolve: Vec<String>,
    #[serde(default)]
    pub transformers: Transformers,
}

impl FromStr for Rules {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "rules.toml")
    }
}

impl Rules {
    /// Parse rules from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let rules: Rules = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        rules.validate(&source_ctx)?;
        Ok(rules)
    }

    /// Header text, if one is configured and not blank.
    pub fn header_text(&self) -> Option<&str> {
        self.header.as_deref().filter(|h| !h.trim().is_empty())
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for name in &self.do_not_resolve {
            if !is_identifier(name) {
                return Err(ctx.validation_error(
                    format!("'{}' in do_not_resolve is not a type name", name),
                    find_value_span(ctx.src(), "do_not_resolve", name),
                ));
            }
        }

        for rule in self.transformers.iter() {
            if rule.value.trim().is_empty() {
                return Err(ctx.validation_error(
                    format!("{} transformer has an empty value", rule.kind),
                    find_value_span(ctx.src(), "value", &rule.value),
                ));
            }

            if let Some(name) = &rule.name {
                if !rule.kind.is_named() {
                    return Err(ctx.validation_error(
                        format!(
                            "'name' only applies to enum and reference transformers, not {}",
                            rule.kind
                        ),
                        find_value_span(ctx.src(), "name", name),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// A rules file on disk with its parsed content.
#[derive(Debug, Clone)]
pub struct RulesFile {
    path: PathBuf,
    rules: Rules,
}

impl RulesFile {
    /// Locate the rules module below `root`.
    pub fn find(root: &Path) -> Result<PathBuf> {
        let path = root.join(RULES_PATH);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Box::new(Error::RulesNotFound {
                root: root.to_path_buf(),
            }))
        }
    }

    /// Open and parse a rules file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let rules = Rules::from_str_with_filename(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            transformers = rules.transformers.len(),
            "loaded rules module"
        );

        Ok(Self { path, rules })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}
