//! Python identifier rules.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Python hard keywords (3.12). Soft keywords such as `match`, `case` and
/// `type` are valid identifiers and are not listed.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Check if a name is a Python reserved keyword
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Validate that a name can be used as a Python attribute or class name.
///
/// Returns `None` if valid, or `Some(reason)` describing why it is not.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if is_xid_start(c) || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(is_xid_continue) {
        return Some("name may only contain letters, digits, and underscores");
    }

    if is_python_keyword(name) {
        return Some("name is a Python reserved keyword");
    }

    None
}

/// Shorthand for `validate_identifier(name).is_none()`
pub fn is_valid_identifier(name: &str) -> bool {
    validate_identifier(name).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("name"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("field2"));
        assert!(is_valid_identifier("Movie"));
        assert!(is_valid_identifier("café"));
        assert!(is_valid_identifier("名前"));
        assert!(is_valid_identifier("_1"));
        assert!(is_valid_identifier("match"));
        assert!(is_valid_identifier("type"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(validate_identifier(""), Some("name cannot be empty"));
        assert_eq!(
            validate_identifier("2nd"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("my-field"),
            Some("name may only contain letters, digits, and underscores")
        );
        assert_eq!(
            validate_identifier("has space"),
            Some("name may only contain letters, digits, and underscores")
        );
        assert_eq!(
            validate_identifier("x²"),
            Some("name may only contain letters, digits, and underscores")
        );
        assert_eq!(
            validate_identifier("½"),
            Some("name must start with a letter or underscore")
        );
        assert_eq!(
            validate_identifier("class"),
            Some("name is a Python reserved keyword")
        );
        assert_eq!(
            validate_identifier("None"),
            Some("name is a Python reserved keyword")
        );
    }
}
