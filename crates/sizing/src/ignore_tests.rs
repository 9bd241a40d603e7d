use super::*;

fn patterns(raw: &[&str]) -> IgnorePatterns {
    IgnorePatterns::new(raw.iter().map(|p| p.to_string()).collect())
}

#[test]
fn test_empty_patterns_never_ignore() {
    let empty = IgnorePatterns::default();
    assert!(!is_ignorable("main.go", &empty));
    assert!(!is_ignorable("", &empty));
}

#[test]
fn test_exact_match() {
    assert!(is_ignorable("Cargo.lock", &patterns(&["Cargo.lock"])));
    assert!(!is_ignorable("crates/Cargo.lock", &patterns(&["Cargo.lock"])));
}

#[test]
fn test_wildcard_matches_extension() {
    assert!(is_ignorable("main.go", &patterns(&["*.go"])));
    assert!(!is_ignorable("main.txt", &patterns(&["*.go"])));
}

#[test]
fn test_wildcard_is_a_substring_test_not_a_suffix_anchor() {
    assert!(is_ignorable("main.go.orig", &patterns(&["*.go"])));
    assert!(is_ignorable("pkg/.golangci.yml", &patterns(&["*.go"])));
}

#[test]
fn test_wildcard_prefix_is_discarded() {
    // Only the text after `*` is consulted.
    assert!(is_ignorable("src/lib.snap", &patterns(&["tests/*.snap"])));
}

#[test]
fn test_trailing_wildcard_matches_everything() {
    assert!(is_ignorable("anything.rs", &patterns(&["vendor/*"])));
}

#[test]
fn test_multiple_wildcards_use_first_fragment() {
    // "a*b*c" → fragment "b".
    assert!(is_ignorable("xbx", &patterns(&["a*b*c"])));
    assert!(!is_ignorable("xcx", &patterns(&["a*b*c"])));
}

#[test]
fn test_any_pattern_matching_is_enough() {
    let set = patterns(&["Cargo.lock", "*.md"]);
    assert!(is_ignorable("README.md", &set));
    assert!(is_ignorable("Cargo.lock", &set));
    assert!(!is_ignorable("src/main.rs", &set));
}

#[test]
fn test_from_whitespace_separated() {
    let set = IgnorePatterns::from_whitespace_separated("  Cargo.lock\n*.md\t yarn.lock ");
    assert_eq!(set.as_slice(), ["Cargo.lock", "*.md", "yarn.lock"]);
    assert!(IgnorePatterns::from_whitespace_separated("   ").is_empty());
}

#[test]
fn test_is_ignorable_is_idempotent() {
    let set = patterns(&["*.md"]);
    assert_eq!(
        is_ignorable("docs/guide.md", &set),
        is_ignorable("docs/guide.md", &set)
    );
}
