//! Structural type shapes.

use serde::{Deserialize, Serialize};

/// The resolved shape of a declaration.
///
/// Serialized with an internal `kind` tag, e.g. `{ "kind": "array", "element": { "kind": "string" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    String,
    Number,
    Boolean,
    #[serde(rename = "bigint")]
    BigInt,
    Null,
    Undefined,
    Any,
    Unknown,
    /// A literal type, kept as source text (`"admin"`, `42`, `true`).
    Literal { value: String },
    Object {
        #[serde(default)]
        fields: Vec<Field>,
    },
    Array { element: Box<TypeShape> },
    Tuple {
        #[serde(default)]
        elements: Vec<TypeShape>,
    },
    Union { variants: Vec<TypeShape> },
    Enum {
        name: String,
        #[serde(default)]
        members: Vec<EnumMember>,
    },
    /// A named type that was not (or could not be) resolved.
    Reference { name: String },
}

/// A property of an object shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(rename = "type")]
    pub ty: TypeShape,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            name: name.into(),
            optional: false,
            ty,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A member of an enum shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    /// Initializer text, if any (`"ADMIN"`, `1`).
    #[serde(default)]
    pub value: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An enum type found inside a structural type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumRef {
    pub name: String,
}

impl TypeShape {
    /// Shorthand for an array of `element`.
    pub fn array(element: TypeShape) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Shorthand for an object with the given fields.
    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        Self::Object {
            fields: fields.into_iter().collect(),
        }
    }

    /// Shorthand for an unresolved reference.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference { name: name.into() }
    }

    /// Shorthand for an enum with members that have no initializer.
    pub fn enumeration<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            name: name.into(),
            members: members.into_iter().map(EnumMember::new).collect(),
        }
    }

    /// Lowercase kind name, as used in the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeShape::String => "string",
            TypeShape::Number => "number",
            TypeShape::Boolean => "boolean",
            TypeShape::BigInt => "bigint",
            TypeShape::Null => "null",
            TypeShape::Undefined => "undefined",
            TypeShape::Any => "any",
            TypeShape::Unknown => "unknown",
            TypeShape::Literal { .. } => "literal",
            TypeShape::Object { .. } => "object",
            TypeShape::Array { .. } => "array",
            TypeShape::Tuple { .. } => "tuple",
            TypeShape::Union { .. } => "union",
            TypeShape::Enum { .. } => "enum",
            TypeShape::Reference { .. } => "reference",
        }
    }

    /// Enum types reachable from this shape, in depth-first order.
    ///
    /// Each enum name is reported once, at its first occurrence.
    pub fn enum_refs(&self) -> Vec<EnumRef> {
        let mut refs = Vec::new();
        self.collect_enum_refs(&mut refs);
        refs
    }

    fn collect_enum_refs(&self, refs: &mut Vec<EnumRef>) {
        match self {
            TypeShape::Enum { name, .. } => {
                if !refs.iter().any(|r| &r.name == name) {
                    refs.push(EnumRef { name: name.clone() });
                }
            }
            TypeShape::Object { fields } => {
                for field in fields {
                    field.ty.collect_enum_refs(refs);
                }
            }
            TypeShape::Array { element } => element.collect_enum_refs(refs),
            TypeShape::Tuple { elements: shapes } | TypeShape::Union { variants: shapes } => {
                for shape in shapes {
                    shape.collect_enum_refs(refs);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(TypeShape::String.kind(), "string");
        assert_eq!(TypeShape::BigInt.kind(), "bigint");
        assert_eq!(TypeShape::reference("Date").kind(), "reference");
    }

    #[test]
    fn test_enum_refs_in_scan_order() {
        let shape = TypeShape::object([
            Field::new("role", TypeShape::enumeration("Role", ["Admin", "User"])),
            Field::new(
                "history",
                TypeShape::array(TypeShape::object([Field::new(
                    "status",
                    TypeShape::enumeration("Status", ["Active"]),
                )])),
            ),
            Field::new("fallback", TypeShape::enumeration("Role", ["Admin", "User"])),
        ]);

        let names: Vec<_> = shape.enum_refs().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Role", "Status"]);
    }

    #[test]
    fn test_enum_refs_inside_unions_and_tuples() {
        let shape = TypeShape::Union {
            variants: vec![
                TypeShape::Null,
                TypeShape::Tuple {
                    elements: vec![TypeShape::enumeration("Color", ["Red"])],
                },
            ],
        };

        assert_eq!(
            shape.enum_refs(),
            vec![EnumRef {
                name: "Color".to_string()
            }]
        );
    }

    #[test]
    fn test_references_are_not_enum_refs() {
        let shape = TypeShape::object([Field::new("created", TypeShape::reference("Date"))]);
        assert!(shape.enum_refs().is_empty());
    }

    #[test]
    fn test_deserialize_nested_shape() {
        let shape: TypeShape = serde_json::from_str(
            r#"{
                "kind": "object",
                "fields": [
                    { "name": "tags", "optional": true, "type": { "kind": "array", "element": { "kind": "string" } } },
                    { "name": "role", "type": { "kind": "enum", "name": "Role", "members": [{ "name": "Admin", "value": "\"admin\"" }] } }
                ]
            }"#,
        )
        .unwrap();

        let TypeShape::Object { fields } = shape else {
            panic!("expected object shape");
        };
        assert_eq!(fields.len(), 2);
        assert!(fields[0].optional);
        assert_eq!(fields[0].ty, TypeShape::array(TypeShape::String));
        assert_eq!(
            fields[1].ty,
            TypeShape::Enum {
                name: "Role".to_string(),
                members: vec![EnumMember {
                    name: "Admin".to_string(),
                    value: Some("\"admin\"".to_string()),
                }],
            }
        );
    }
}
