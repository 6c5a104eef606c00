//! Replay scripts.
//!
//! A script describes the documents an in-memory editor holds, the hover
//! text each word resolves to, and a sequence of editor actions:
//!
//! ```json
//! {
//!   "latency_ms": 40,
//!   "documents": [{ "uri": "file:///src/main.rs", "text": "fn main() { run(); }" }],
//!   "hovers": { "run": "```rust\nfn run()\n```" },
//!   "steps": [
//!     { "open": "file:///src/main.rs" },
//!     { "cursor": { "line": 0, "character": 13 } },
//!     { "wait_ms": 100 },
//!     "hide",
//!     "show"
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, bail};
use docpane_primitives::{DocumentLocator, TextPosition};
use serde::Deserialize;

/// A parsed replay script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
	/// Simulated hover provider latency in milliseconds.
	#[serde(default)]
	pub latency_ms: u64,
	/// Documents available to `open` steps.
	#[serde(default)]
	pub documents: Vec<ScriptDocument>,
	/// Hover markdown keyed by word.
	#[serde(default)]
	pub hovers: HashMap<String, String>,
	/// Actions to replay, in order.
	pub steps: Vec<Step>,
}

/// A document the scripted editor can open.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptDocument {
	/// Document locator.
	pub uri: DocumentLocator,
	/// Initial text.
	#[serde(default)]
	pub text: String,
}

/// One scripted editor action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
	/// Focuses a document, cursor at its start.
	Open(DocumentLocator),
	/// Unfocuses the active document.
	Close,
	/// Moves the cursor in the active document.
	Cursor(TextPosition),
	/// Inserts text at the cursor and bumps the document version.
	Insert(String),
	/// Shows the panel.
	Show,
	/// Hides the panel.
	Hide,
	/// Reports that hover results changed.
	Invalidate,
	/// Lets time pass.
	WaitMs(u64),
}

impl Script {
	/// Parses a script from JSON.
	pub fn from_json(input: &str) -> anyhow::Result<Self> {
		let script: Self = serde_json::from_str(input).context("invalid replay script")?;
		script.validate()
	}

	/// Loads a script from a JSON file.
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let input = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
		Self::from_json(&input).with_context(|| format!("in {}", path.display()))
	}

	fn validate(self) -> anyhow::Result<Self> {
		for step in &self.steps {
			if let Step::Open(uri) = step
				&& !self.documents.iter().any(|doc| &doc.uri == uri)
			{
				bail!("step opens unknown document {uri}");
			}
		}
		Ok(self)
	}
}
