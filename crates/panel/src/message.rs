use serde::Serialize;

/// Message posted to the presentation sink.
///
/// Serializes with a `type` tag, e.g. `{"type":"update","body":"<p>..</p>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PanelMessage {
	/// Replace the panel body with rendered documentation.
	Update {
		/// Rendered HTML fragment.
		body: String,
	},
	/// No documentation is available at the cursor.
	NoContent {
		/// Human-readable notice.
		message: String,
	},
}

impl PanelMessage {
	/// Creates a [`PanelMessage::Update`].
	pub fn update(body: impl Into<String>) -> Self {
		Self::Update { body: body.into() }
	}

	/// Creates a [`PanelMessage::NoContent`].
	pub fn no_content(message: impl Into<String>) -> Self {
		Self::NoContent { message: message.into() }
	}
}
