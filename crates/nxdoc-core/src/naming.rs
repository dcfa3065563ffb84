//! NeXus naming conventions.
//!
//! Two reserved prefixes mark names that are documented elsewhere in the
//! manual and therefore deserve a cross-reference instead of literal text:
//!
//! - `NX` marks a schema class such as `NXentry` or `NXdetector`.
//! - `NX_` marks a controlled vocabulary type or unit category such as
//!   `NX_FLOAT` or `NX_LENGTH`.

/// Prefix of every schema class name.
pub const CLASS_PREFIX: &str = "NX";

/// Prefix of every controlled vocabulary type and unit category.
pub const VOCABULARY_PREFIX: &str = "NX_";

/// Type assumed for a field or attribute that declares none.
pub const DEFAULT_TYPE: &str = "NX_CHAR";

/// Returns `true` if `name` follows the schema class convention.
pub fn is_class_name(name: &str) -> bool {
    name.starts_with(CLASS_PREFIX)
}

/// Returns `true` if `name` refers to a controlled vocabulary entry.
pub fn is_vocabulary_name(name: &str) -> bool {
    name.starts_with(VOCABULARY_PREFIX)
}

/// Strip the schema class prefix, e.g. `NXdetector` becomes `detector`.
///
/// Names without the prefix are returned unchanged.
pub fn class_stem(name: &str) -> &str {
    name.strip_prefix(CLASS_PREFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert!(is_class_name("NXdetector"));
        assert!(is_class_name("NX_FLOAT"));
        assert!(!is_class_name("detector"));
        assert!(!is_class_name("nxdetector"));
    }

    #[test]
    fn test_vocabulary_names() {
        assert!(is_vocabulary_name("NX_FLOAT"));
        assert!(!is_vocabulary_name("NXdetector"));
        assert!(!is_vocabulary_name("mm"));
    }

    #[test]
    fn test_class_stem_strips_prefix_once() {
        assert_eq!(class_stem("NXdetector"), "detector");
        assert_eq!(class_stem("NXNXfoo"), "NXfoo");
        assert_eq!(class_stem("custom"), "custom");
    }
}
