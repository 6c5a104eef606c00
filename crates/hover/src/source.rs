use async_trait::async_trait;
use docpane_panel::{CancelSignal, Content, ContentSource, SourceError};
use docpane_primitives::EditorSnapshot;
use tracing::trace;

use crate::markdown::{markdown_from_hovers, markdown_to_html};
use crate::{HoverProvider, MarkdownRenderer};

/// Content source that renders the hovers at the cursor.
#[derive(Debug, Clone)]
pub struct HoverContentSource<P, R> {
	provider: P,
	renderer: R,
}

impl<P, R> HoverContentSource<P, R> {
	/// Creates a source from a hover provider and a markdown renderer.
	pub fn new(provider: P, renderer: R) -> Self {
		Self { provider, renderer }
	}
}

#[async_trait]
impl<P, R> ContentSource for HoverContentSource<P, R>
where
	P: HoverProvider,
	R: MarkdownRenderer,
{
	async fn fetch(&self, editor: &EditorSnapshot, cancel: CancelSignal) -> Result<Content, SourceError> {
		let hovers = self.provider.hovers(&editor.locator, editor.cursor, cancel.child_token()).await?;
		if cancel.is_cancelled() {
			trace!(generation = cancel.generation(), "hover.cancelled_after_request");
			return Ok(Content::Empty);
		}

		let markdown = markdown_from_hovers(&hovers);
		if markdown.is_empty() {
			return Ok(Content::Empty);
		}

		let html = markdown_to_html(&self.renderer, &markdown).await?;
		Ok(Content::html(html))
	}
}
