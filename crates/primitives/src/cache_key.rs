//! Cache keys for panel content.
//!
//! A [`CacheKey`] captures "where the cursor is" closely enough to tell
//! whether documentation fetched earlier is still valid. Cursor moves inside
//! the same word of the same document version produce matching keys.
//!
//! # Matching
//!
//! [`CacheKey::matches`] is not an equivalence relation:
//! [`CacheKey::None`] never matches anything, not even another `None`. A
//! transition from "no editor" to "no editor" is therefore always treated as
//! a change. For that reason the type does not implement [`PartialEq`].

use crate::locator::DocumentLocator;
use crate::snapshot::EditorSnapshot;
use crate::word::WordRange;

/// Identifies the position for which panel content was last computed.
#[derive(Debug, Clone, Default)]
pub enum CacheKey {
	/// No editor is active.
	#[default]
	None,
	/// An editor is active on a document.
	Document {
		/// Document identity.
		locator: DocumentLocator,
		/// Document version.
		version: i32,
		/// Word under the cursor, absent when the cursor is not on a word.
		word_range: Option<WordRange>,
	},
}

impl CacheKey {
	/// Derives a key from the active editor, or [`CacheKey::None`] without one.
	pub fn from_snapshot(snapshot: Option<&EditorSnapshot>) -> Self {
		match snapshot {
			None => Self::None,
			Some(snapshot) => Self::Document {
				locator: snapshot.locator.clone(),
				version: snapshot.version,
				word_range: snapshot.word_range,
			},
		}
	}

	/// Returns true if content computed for `self` is still valid for `other`.
	pub fn matches(&self, other: &CacheKey) -> bool {
		match (self, other) {
			(
				Self::Document {
					locator: a_locator,
					version: a_version,
					word_range: a_range,
				},
				Self::Document {
					locator: b_locator,
					version: b_version,
					word_range: b_range,
				},
			) => a_locator == b_locator && a_version == b_version && a_range == b_range,
			_ => false,
		}
	}

	/// Returns true for [`CacheKey::None`].
	pub const fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}

	/// Returns the document locator, if any.
	pub fn locator(&self) -> Option<&DocumentLocator> {
		match self {
			Self::None => None,
			Self::Document { locator, .. } => Some(locator),
		}
	}
}

#[cfg(test)]
mod tests;
