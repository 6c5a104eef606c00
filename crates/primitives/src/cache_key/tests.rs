use proptest::prelude::*;

use super::*;
use crate::position::TextPosition;

fn doc_key(uri: &str, version: i32, word: Option<(usize, usize)>) -> CacheKey {
	CacheKey::Document {
		locator: DocumentLocator::new(uri),
		version,
		word_range: word.map(|(start, end)| WordRange::new(start, end)),
	}
}

#[test]
fn none_never_matches_none() {
	assert!(!CacheKey::None.matches(&CacheKey::None));
}

#[test]
fn none_never_matches_document() {
	let key = doc_key("file:///a.rs", 1, None);
	assert!(!CacheKey::None.matches(&key));
	assert!(!key.matches(&CacheKey::None));
}

#[test]
fn document_keys_compare_all_fields() {
	let base = doc_key("file:///a.rs", 3, Some((5, 8)));
	assert!(base.matches(&doc_key("file:///a.rs", 3, Some((5, 8)))));
	assert!(!base.matches(&doc_key("file:///b.rs", 3, Some((5, 8)))));
	assert!(!base.matches(&doc_key("file:///a.rs", 4, Some((5, 8)))));
	assert!(!base.matches(&doc_key("file:///a.rs", 3, Some((5, 9)))));
	assert!(!base.matches(&doc_key("file:///a.rs", 3, None)));
}

#[test]
fn absent_word_ranges_match() {
	let a = doc_key("file:///a.rs", 3, None);
	assert!(a.matches(&doc_key("file:///a.rs", 3, None)));
}

#[test]
fn from_snapshot_carries_word_range() {
	let snapshot = EditorSnapshot::new("file:///a.rs", 7, TextPosition::new(0, 6), Some(WordRange::new(5, 8)));
	let key = CacheKey::from_snapshot(Some(&snapshot));
	assert!(key.matches(&doc_key("file:///a.rs", 7, Some((5, 8)))));
	assert_eq!(key.locator().map(DocumentLocator::as_str), Some("file:///a.rs"));
	assert!(CacheKey::from_snapshot(None).is_none());
}

#[test]
fn cursor_moves_within_word_keep_key() {
	let before = EditorSnapshot::new("file:///a.rs", 3, TextPosition::new(0, 5), Some(WordRange::new(5, 8)));
	let after = EditorSnapshot::new("file:///a.rs", 3, TextPosition::new(0, 7), Some(WordRange::new(5, 8)));
	assert!(CacheKey::from_snapshot(Some(&before)).matches(&CacheKey::from_snapshot(Some(&after))));
}

proptest! {
	#[test]
	fn document_matching_is_reflexive_and_symmetric(
		uri_a in "[a-c]{1,3}",
		uri_b in "[a-c]{1,3}",
		version_a in 0i32..3,
		version_b in 0i32..3,
		range_a in proptest::option::of((0usize..4, 4usize..8)),
		range_b in proptest::option::of((0usize..4, 4usize..8)),
	) {
		let a = doc_key(&uri_a, version_a, range_a);
		let b = doc_key(&uri_b, version_b, range_b);
		prop_assert!(a.matches(&a));
		prop_assert_eq!(a.matches(&b), b.matches(&a));
		prop_assert_eq!(a.matches(&b), uri_a == uri_b && version_a == version_b && range_a == range_b);
	}
}
