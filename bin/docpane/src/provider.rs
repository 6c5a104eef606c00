//! Hover provider answering from the script's word table.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use docpane_hover::{HoverError, HoverProvider};
use docpane_primitives::{DocumentLocator, TextPosition};
use lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::host::ScriptHost;

/// Looks up the word under the cursor in a fixed table after a simulated
/// round trip.
pub struct TableHoverProvider {
	host: Arc<ScriptHost>,
	table: HashMap<String, String>,
	latency: Duration,
}

impl TableHoverProvider {
	pub fn new(host: Arc<ScriptHost>, table: HashMap<String, String>, latency: Duration) -> Self {
		Self { host, table, latency }
	}
}

#[async_trait]
impl HoverProvider for TableHoverProvider {
	async fn hovers(&self, locator: &DocumentLocator, position: TextPosition, cancel: CancellationToken) -> Result<Vec<Hover>, HoverError> {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => {
				debug!(%locator, "provider.cancelled");
				return Ok(Vec::new());
			}
			_ = tokio::time::sleep(self.latency) => {}
		}

		let Some(word) = self.host.word_at(locator, position) else {
			return Ok(Vec::new());
		};
		Ok(self
			.table
			.get(&word)
			.map(|markdown| Hover {
				contents: HoverContents::Markup(MarkupContent {
					kind: MarkupKind::Markdown,
					value: markdown.clone(),
				}),
				range: None,
			})
			.into_iter()
			.collect())
	}
}
