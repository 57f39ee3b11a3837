//! Property-based tests for path filters.
//!
//! These tests use proptest to verify the matching rule across many randomly
//! generated filters and hierarchy paths.

use proptest::prelude::*;

use crate::filter::{is_prefix_of, PathFilter};

/// Strategy for generating path segments from a small alphabet, so that
/// random filters and paths collide often enough to exercise matches.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[ab]{1,2}"
}

/// Strategy for generating hierarchy paths (project, or project/repo).
fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..=2)
}

/// Strategy for generating filter entries, up to one level deeper than a path.
fn entry_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..=3)
}

proptest! {
    #[test]
    fn empty_filter_matches_any_path(path in path_strategy()) {
        prop_assert!(PathFilter::new().matches(&path));
    }

    #[test]
    fn matches_iff_some_entry_agrees_on_its_length(
        entries in prop::collection::vec(entry_strategy(), 1..4),
        path in path_strategy(),
    ) {
        let expected = entries.iter().any(|entry| {
            (0..entry.len()).all(|i| path.get(i).is_some_and(|segment| *segment == entry[i]))
        });
        let filter = PathFilter::from_entries(entries);
        prop_assert_eq!(filter.matches(&path), expected);
    }

    #[test]
    fn entry_longer_than_path_never_matches(
        path in path_strategy(),
        extra in segment_strategy(),
    ) {
        let mut entry = path.clone();
        entry.push(extra);
        prop_assert!(!is_prefix_of(&entry, &path));
    }

    #[test]
    fn path_prefixes_always_match(path in path_strategy(), cut in 1usize..=2) {
        let cut = cut.min(path.len());
        let filter = PathFilter::from_entries(vec![path[..cut].to_vec()]);
        prop_assert!(filter.matches(&path));
    }

    #[test]
    fn parse_round_trips_joined_entries(entries in prop::collection::vec(entry_strategy(), 0..4)) {
        let joined: Vec<String> = entries.iter().map(|entry| entry.join("/")).collect();
        let parsed = PathFilter::parse(&joined);
        prop_assert_eq!(parsed.entries(), entries.as_slice());
    }
}
