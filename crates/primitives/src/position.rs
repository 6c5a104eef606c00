use ropey::RopeSlice;
use serde::{Deserialize, Serialize};

/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// Cursor position in line/character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextPosition {
	/// Zero-based line index.
	pub line: u32,
	/// Zero-based character offset in the line.
	pub character: u32,
}

impl TextPosition {
	/// Creates a new position.
	pub const fn new(line: u32, character: u32) -> Self {
		Self { line, character }
	}
}

/// Converts a line/character position into a char index.
///
/// Returns `None` when the line does not exist or the character offset lies
/// past the end of the line (the line terminator itself is addressable).
pub fn position_to_char(text: RopeSlice, pos: TextPosition) -> Option<CharIdx> {
	let line = pos.line as usize;
	if line >= text.len_lines() {
		return None;
	}
	let line_start = text.line_to_char(line);
	let line_len = text.line(line).len_chars();
	let character = pos.character as usize;
	(character <= line_len).then_some(line_start + character)
}

/// Converts a char index into a line/character position.
pub fn char_to_position(text: RopeSlice, idx: CharIdx) -> Option<TextPosition> {
	if idx > text.len_chars() {
		return None;
	}
	let line = text.char_to_line(idx);
	let character = idx - text.line_to_char(line);
	Some(TextPosition::new(u32::try_from(line).ok()?, u32::try_from(character).ok()?))
}
