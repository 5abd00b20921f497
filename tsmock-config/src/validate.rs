//! Span lookup for validation errors.

use miette::SourceSpan;

/// Find the span of `key = "value"` in the TOML source, falling back to the
/// quoted value alone.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    let assignment = format!("{} = {}", key, quoted);

    if let Some(pos) = src.find(&assignment) {
        let offset = pos + key.len() + 3;
        return Some(SourceSpan::from((offset, quoted.len())));
    }

    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos, quoted.len())))
}
