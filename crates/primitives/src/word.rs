//! Word detection under the cursor.

use ropey::RopeSlice;

use crate::position::CharIdx;

/// Half-open span `[start, end)` of char indices covering one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRange {
	/// First char of the word (inclusive).
	pub start: CharIdx,
	/// One past the last char of the word (exclusive).
	pub end: CharIdx,
}

impl WordRange {
	/// Creates a new word range.
	pub const fn new(start: CharIdx, end: CharIdx) -> Self {
		Self { start, end }
	}

	/// Returns the number of chars covered.
	pub const fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	/// Returns true if the range covers no chars.
	pub const fn is_empty(&self) -> bool {
		self.end <= self.start
	}

	/// Returns true if `pos` lies on the word or directly after its last char.
	pub const fn touches(&self, pos: CharIdx) -> bool {
		self.start <= pos && pos <= self.end
	}
}

/// Returns whether a character is a word character (alphanumeric or underscore).
#[inline]
pub fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

/// Finds the word touching `pos`.
///
/// A cursor sitting directly after a word's last char still counts as being
/// over that word. Returns `None` when neither side of the cursor is a word
/// char or `pos` lies past the end of the text.
pub fn word_range_at(text: RopeSlice, pos: CharIdx) -> Option<WordRange> {
	if pos > text.len_chars() {
		return None;
	}

	let on_word = text.get_char(pos).is_some_and(is_word_char);
	let after_word = pos > 0 && text.get_char(pos - 1).is_some_and(is_word_char);
	if !on_word && !after_word {
		return None;
	}

	let mut start = pos;
	while start > 0 && text.get_char(start - 1).is_some_and(is_word_char) {
		start -= 1;
	}
	let mut end = pos;
	while text.get_char(end).is_some_and(is_word_char) {
		end += 1;
	}

	Some(WordRange::new(start, end))
}
