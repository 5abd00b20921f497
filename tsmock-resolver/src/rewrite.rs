//! Rule-driven rendering of mock values.

use tsmock_codegen::{RewriteError, Rewriter};
use tsmock_config::Transformers;
use tsmock_core::is_identifier;
use tsmock_ir::{Field, TypeShape};

/// Renders a shape as a single-line TypeScript literal.
///
/// Transformer rules are consulted first for every node (the first applicable
/// rule wins); otherwise a default value is produced:
///
/// | shape       | value                   |
/// |-------------|-------------------------|
/// | `string`    | `""`                    |
/// | `number`    | `0`                     |
/// | `boolean`   | `false`                 |
/// | `bigint`    | `0n`                    |
/// | `null`, `any`, `unknown` | `null`     |
/// | `undefined` | `undefined`             |
/// | literal     | the literal text        |
/// | object      | `{ a: .., b: .. }`      |
/// | array       | `[<element>]`           |
/// | tuple       | `[<a>, <b>]`            |
/// | union       | the first variant       |
/// | enum        | `Enum.FirstMember`      |
/// | reference   | `{} as Name`            |
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleRewriter;

impl Rewriter for RuleRewriter {
    fn rewrite(&self, ty: &TypeShape, transformers: &Transformers) -> Result<String, RewriteError> {
        render(ty, transformers, None)
    }
}

/// Render `ty`, generated for the object field `field` (if any).
fn render(
    ty: &TypeShape,
    transformers: &Transformers,
    field: Option<&str>,
) -> Result<String, RewriteError> {
    let name = match ty {
        TypeShape::Enum { name, .. } | TypeShape::Reference { name } => Some(name.as_str()),
        _ => None,
    };
    if let Some(rule) = transformers.find(ty.kind(), name, field) {
        tracing::trace!(kind = ty.kind(), ?field, value = %rule.value, "transformer applied");
        return Ok(rule.value.clone());
    }

    let value = match ty {
        TypeShape::String => "\"\"".to_string(),
        TypeShape::Number => "0".to_string(),
        TypeShape::Boolean => "false".to_string(),
        TypeShape::BigInt => "0n".to_string(),
        TypeShape::Null | TypeShape::Any | TypeShape::Unknown => "null".to_string(),
        TypeShape::Undefined => "undefined".to_string(),
        TypeShape::Literal { value } => value.clone(),
        TypeShape::Object { fields } => render_object(fields, transformers)?,
        TypeShape::Array { element } => format!("[{}]", render(element, transformers, field)?),
        TypeShape::Tuple { elements } => {
            let elements = elements
                .iter()
                .map(|e| render(e, transformers, field))
                .collect::<Result<Vec<_>, _>>()?;
            format!("[{}]", elements.join(", "))
        }
        TypeShape::Union { variants } => {
            let first = variants.first().ok_or_else(|| RewriteError {
                kind: ty.kind().to_string(),
                reason: "union has no variants".to_string(),
            })?;
            render(first, transformers, field)?
        }
        TypeShape::Enum { name, members } => {
            let member = members.first().ok_or_else(|| RewriteError {
                kind: ty.kind().to_string(),
                reason: format!("enum '{}' has no members", name),
            })?;
            if is_identifier(&member.name) {
                format!("{}.{}", name, member.name)
            } else {
                format!("{}[{}]", name, quote(&member.name))
            }
        }
        TypeShape::Reference { name } => format!("{{}} as {}", name),
    };

    Ok(value)
}

fn render_object(fields: &[Field], transformers: &Transformers) -> Result<String, RewriteError> {
    if fields.is_empty() {
        return Ok("{}".to_string());
    }

    let properties = fields
        .iter()
        .map(|f| -> Result<String, RewriteError> {
            let key = if is_identifier(&f.name) {
                f.name.clone()
            } else {
                quote(&f.name)
            };
            Ok(format!("{}: {}", key, render(&f.ty, transformers, Some(&f.name))?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{{ {} }}", properties.join(", ")))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
