//! Slug derivation for project routes.
//!
//! A slug is always `base_url + relative_path` with one normalization pass
//! that collapses a single doubled separator. The relative path is
//! host-derived and carries a leading `/`, so joining against the default
//! base URL `/` produces exactly one `//` to collapse.

/// Derive the route slug for a project.
pub fn derive(base_url: &str, relative_path: &str) -> String {
    normalize(format!("{base_url}{relative_path}"))
}

/// Collapse exactly one occurrence of a doubled separator.
///
/// Single pass, not recursive: three or more consecutive separators are
/// only partially collapsed. Matches the upstream route convention.
pub fn normalize(slug: String) -> String {
    slug.replacen("//", "/", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_with_root_base() {
        assert_eq!(derive("/", "/alpha/index"), "/alpha/index");
    }

    #[test]
    fn test_derive_with_section_base() {
        assert_eq!(derive("/projects", "/alpha"), "/projects/alpha");
        assert_eq!(derive("/projects/", "/alpha"), "/projects/alpha");
    }

    #[test]
    fn test_derive_keeps_base_prefix() {
        let slug = derive("/work/", "/alpha/index");
        assert!(slug.starts_with("/work"));
        assert!(!slug.contains("//"));
    }

    #[test]
    fn test_normalize_single_pass() {
        // Only the first doubled separator collapses
        assert_eq!(normalize("/a//b//c".into()), "/a/b//c");
    }

    #[test]
    fn test_normalize_triple_separator_partial() {
        // 3+ consecutive separators are not fully normalized
        assert_eq!(normalize("///alpha".into()), "//alpha");
    }

    #[test]
    fn test_normalize_no_double() {
        assert_eq!(normalize("/alpha/index".into()), "/alpha/index");
    }
}
