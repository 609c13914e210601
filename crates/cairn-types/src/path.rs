//! Path canonicalization for index keys.
//!
//! The index store has no notion of hierarchy; paths are plain string keys.
//! These helpers define the one canonical form used everywhere: forward
//! slashes as separators, with leading/trailing separators stripped before a
//! path is decomposed into segments.
//!
//! Canonicalization is deliberately shallow. Backslashes become forward
//! slashes and nothing else: no case folding, no `.`/`..` resolution, no
//! collapsing of repeated slashes. Two paths that differ in any of those
//! respects are distinct keys.

/// Canonicalize a path string into the slash-delimited form used as a store
/// key.
///
/// Replaces every backslash with a forward slash. Idempotent: normalizing an
/// already-normalized path returns it unchanged.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip leading and trailing `/` separators.
pub fn trim_separators(path: &str) -> &str {
    path.trim_matches('/')
}

/// Ordered segments of a trimmed, normalized path.
///
/// An empty path yields no segments. Repeated slashes are not collapsed, so
/// `"a//b"` yields `["a", "", "b"]`.
pub fn segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('/').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(normalize("a\\b\\c"), "a/b/c");
        assert_eq!(normalize("\\leading"), "/leading");
        assert_eq!(normalize("mixed/a\\b"), "mixed/a/b");
    }

    #[test]
    fn forward_slashes_are_untouched() {
        assert_eq!(normalize("/a/b/c.txt"), "/a/b/c.txt");
    }

    #[test]
    fn no_other_canonicalization() {
        assert_eq!(normalize("/a//b/./../c"), "/a//b/./../c");
        assert_eq!(normalize("/A/B"), "/A/B");
    }

    #[test]
    fn trim_strips_both_ends_only() {
        assert_eq!(trim_separators("/a/b/c/"), "a/b/c");
        assert_eq!(trim_separators("a/b"), "a/b");
        assert_eq!(trim_separators("///"), "");
        assert_eq!(trim_separators(""), "");
    }

    #[test]
    fn segments_of_empty_path() {
        assert!(segments("").is_empty());
    }

    #[test]
    fn segments_preserve_repeated_slashes() {
        assert_eq!(segments("a//b"), vec!["a", "", "b"]);
        assert_eq!(segments("a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(segments("single"), vec!["single"]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(p in ".*") {
            let once = normalize(&p);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn normalized_paths_contain_no_backslash(p in ".*") {
            prop_assert!(!normalize(&p).contains('\\'));
        }
    }
}
