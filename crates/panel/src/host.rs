//! Collaborator traits implemented by the host editor.

use std::fmt;

use async_trait::async_trait;
use docpane_primitives::EditorSnapshot;
use docpane_worker::CancelSignal;

use crate::error::SourceError;
use crate::message::PanelMessage;

/// Read access to the host editor.
///
/// Called while the scheduler holds its state lock; implementations must not
/// call back into the scheduler.
pub trait EditorHost: Send + Sync {
	/// Returns the active editor, or `None` when no document is focused.
	fn active_editor(&self) -> Option<EditorSnapshot>;
}

/// Documentation returned by a [`ContentSource`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
	/// Nothing to show at this position.
	#[default]
	Empty,
	/// Rendered HTML fragment.
	Html(String),
}

impl Content {
	/// Wraps rendered HTML, mapping an empty string to [`Content::Empty`].
	pub fn html(body: impl Into<String>) -> Self {
		let body = body.into();
		if body.is_empty() { Self::Empty } else { Self::Html(body) }
	}

	/// Returns true for [`Content::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

/// Produces documentation for an editor position.
///
/// Implementations should observe `cancel` and stop early once it fires;
/// the scheduler drops the fetch future on cancellation either way.
#[async_trait]
pub trait ContentSource: Send + Sync {
	/// Fetches documentation for the cursor in `editor`.
	async fn fetch(&self, editor: &EditorSnapshot, cancel: CancelSignal) -> Result<Content, SourceError>;
}

/// Receives panel messages.
///
/// Called while the scheduler holds its state lock; implementations must not
/// call back into the scheduler.
pub trait PresentationSink: Send + Sync {
	/// Posts one message to the panel.
	fn post(&self, message: PanelMessage);
}

/// Shows an indeterminate progress indicator.
pub trait ProgressIndicator: Send + Sync {
	/// Starts showing progress at `view_id` until the handle is dropped.
	fn show(&self, view_id: &str) -> ProgressHandle;
}

/// Keeps a progress indicator visible; releases it on drop.
pub struct ProgressHandle {
	release: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl ProgressHandle {
	/// Creates a handle that runs `release` when dropped.
	pub fn new<F>(release: F) -> Self
	where
		F: FnOnce() + Send + 'static,
	{
		Self {
			release: Some(Box::new(release)),
		}
	}

	/// Creates a handle with nothing to release.
	pub fn noop() -> Self {
		Self { release: None }
	}
}

impl Drop for ProgressHandle {
	fn drop(&mut self) {
		if let Some(release) = self.release.take() {
			release();
		}
	}
}

impl fmt::Debug for ProgressHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProgressHandle").field("armed", &self.release.is_some()).finish()
	}
}

/// Indicator that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressIndicator for NoProgress {
	fn show(&self, _view_id: &str) -> ProgressHandle {
		ProgressHandle::noop()
	}
}
