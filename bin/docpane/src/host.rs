//! In-memory editor host backed by ropes.

use std::collections::HashMap;

use anyhow::{Context, bail};
use docpane_panel::EditorHost;
use docpane_primitives::{CharIdx, DocumentLocator, EditorSnapshot, Rope, TextPosition, char_to_position, position_to_char, word_range_at};
use parking_lot::Mutex;

use crate::script::ScriptDocument;

struct Document {
	text: Rope,
	version: i32,
}

struct Focus {
	locator: DocumentLocator,
	cursor: CharIdx,
}

#[derive(Default)]
struct HostState {
	documents: HashMap<DocumentLocator, Document>,
	focus: Option<Focus>,
}

/// Editor host holding scripted documents and a single cursor.
#[derive(Default)]
pub struct ScriptHost {
	state: Mutex<HostState>,
}

impl ScriptHost {
	/// Creates a host holding `documents`, none of them focused.
	pub fn new(documents: &[ScriptDocument]) -> Self {
		let documents = documents
			.iter()
			.map(|doc| {
				(
					doc.uri.clone(),
					Document {
						text: Rope::from_str(&doc.text),
						version: 1,
					},
				)
			})
			.collect();
		Self {
			state: Mutex::new(HostState { documents, focus: None }),
		}
	}

	/// Focuses `locator` with the cursor at the start of the document.
	pub fn open(&self, locator: &DocumentLocator) -> anyhow::Result<()> {
		let mut state = self.state.lock();
		if !state.documents.contains_key(locator) {
			bail!("unknown document {locator}");
		}
		state.focus = Some(Focus {
			locator: locator.clone(),
			cursor: 0,
		});
		Ok(())
	}

	/// Leaves no document focused.
	pub fn close(&self) {
		self.state.lock().focus = None;
	}

	/// Moves the cursor of the focused document.
	pub fn set_cursor(&self, position: TextPosition) -> anyhow::Result<()> {
		let mut state = self.state.lock();
		let HostState { documents, focus } = &mut *state;
		let focus = focus.as_mut().context("no document is open")?;
		let doc = documents.get(&focus.locator).context("focused document vanished")?;
		focus.cursor = position_to_char(doc.text.slice(..), position)
			.with_context(|| format!("position {}:{} is outside {}", position.line, position.character, focus.locator))?;
		Ok(())
	}

	/// Inserts `text` at the cursor, moving the cursor past it.
	pub fn insert(&self, text: &str) -> anyhow::Result<()> {
		let mut state = self.state.lock();
		let HostState { documents, focus } = &mut *state;
		let focus = focus.as_mut().context("no document is open")?;
		let doc = documents.get_mut(&focus.locator).context("focused document vanished")?;
		doc.text.insert(focus.cursor, text);
		doc.version += 1;
		focus.cursor += text.chars().count();
		Ok(())
	}

	/// Returns the word at `position` in `locator`, if any.
	pub fn word_at(&self, locator: &DocumentLocator, position: TextPosition) -> Option<String> {
		let state = self.state.lock();
		let text = state.documents.get(locator)?.text.slice(..);
		let idx = position_to_char(text, position)?;
		let range = word_range_at(text, idx)?;
		Some(text.slice(range.start..range.end).to_string())
	}
}

impl EditorHost for ScriptHost {
	fn active_editor(&self) -> Option<EditorSnapshot> {
		let state = self.state.lock();
		let focus = state.focus.as_ref()?;
		let doc = state.documents.get(&focus.locator)?;
		let text = doc.text.slice(..);
		Some(EditorSnapshot::new(
			focus.locator.clone(),
			doc.version,
			char_to_position(text, focus.cursor)?,
			word_range_at(text, focus.cursor),
		))
	}
}
