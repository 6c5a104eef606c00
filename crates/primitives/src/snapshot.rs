use crate::locator::DocumentLocator;
use crate::position::TextPosition;
use crate::word::WordRange;

/// State of the active editor at the moment a trigger fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
	/// Document shown in the editor.
	pub locator: DocumentLocator,
	/// Document version, bumped by the host on every edit.
	pub version: i32,
	/// Primary cursor position.
	pub cursor: TextPosition,
	/// Word under the cursor, if any.
	pub word_range: Option<WordRange>,
}

impl EditorSnapshot {
	/// Creates a snapshot.
	pub fn new(locator: impl Into<DocumentLocator>, version: i32, cursor: TextPosition, word_range: Option<WordRange>) -> Self {
		Self {
			locator: locator.into(),
			version,
			cursor,
			word_range,
		}
	}
}
