//! Shared utility functions for code generation.

/// Uppercase the first character if it is a word character
/// (e.g., "user.ts" -> "User.ts", "_id" -> "_id").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphanumeric() || c == '_' => c.to_uppercase().chain(chars).collect(),
        Some(_) => s.to_string(),
        None => String::new(),
    }
}

/// Check whether a name is a plain TypeScript identifier
/// (letters, digits, `_` and `$`, not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
