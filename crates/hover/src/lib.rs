//! Hover-backed documentation for the panel.
//!
//! [`HoverContentSource`] implements [`docpane_panel::ContentSource`] on top
//! of two host capabilities: a [`HoverProvider`] that returns LSP hovers for a
//! position, and a [`MarkdownRenderer`] that turns markdown into an HTML
//! fragment.

use async_trait::async_trait;
use docpane_panel::SourceError;
use docpane_primitives::{DocumentLocator, TextPosition};
use lsp_types::Hover;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Hover flattening, link rewriting and rendering.
pub mod markdown;
mod source;

pub use markdown::{markdown_from_hovers, markdown_to_html, rewrite_file_links};
pub use source::HoverContentSource;

/// Errors from hover providers and markdown renderers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoverError {
	/// The hover request failed.
	#[error("hover request failed: {0}")]
	Provider(String),

	/// Rendering markdown failed.
	#[error("markdown render failed: {0}")]
	Render(String),
}

impl From<HoverError> for SourceError {
	fn from(err: HoverError) -> Self {
		match err {
			HoverError::Provider(msg) => SourceError::Provider(msg),
			HoverError::Render(msg) => SourceError::Render(msg),
		}
	}
}

/// Returns hovers from every provider registered for a document.
#[async_trait]
pub trait HoverProvider: Send + Sync {
	/// Collects hovers at `position`.
	///
	/// `cancel` fires when the panel no longer needs the result.
	async fn hovers(&self, locator: &DocumentLocator, position: TextPosition, cancel: CancellationToken) -> Result<Vec<Hover>, HoverError>;
}

/// Renders markdown into an HTML fragment.
#[async_trait]
pub trait MarkdownRenderer: Send + Sync {
	/// Renders `markdown`.
	async fn render(&self, markdown: &str) -> Result<String, HoverError>;
}

/// Renderer that returns markdown unchanged, for hosts that render on the
/// panel side.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughRenderer;

#[async_trait]
impl MarkdownRenderer for PassthroughRenderer {
	async fn render(&self, markdown: &str) -> Result<String, HoverError> {
		Ok(markdown.to_string())
	}
}
