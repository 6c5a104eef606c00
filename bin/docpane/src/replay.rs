//! Feeds a script's steps to an open documentation panel.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use docpane_hover::{HoverContentSource, PassthroughRenderer};
use docpane_panel::{Collaborators, DocsPanel, PanelConfig, PanelEvent, PresentationSink, ProgressIndicator, UpdateScheduler};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::host::ScriptHost;
use crate::provider::TableHoverProvider;
use crate::script::{Script, Step};

/// Replays `script` and returns once the last update has settled.
pub async fn replay(script: Script, config: PanelConfig, sink: Arc<dyn PresentationSink>, indicator: Arc<dyn ProgressIndicator>) -> anyhow::Result<()> {
	let host = Arc::new(ScriptHost::new(&script.documents));
	let provider = TableHoverProvider::new(Arc::clone(&host), script.hovers, Duration::from_millis(script.latency_ms));
	let scheduler = UpdateScheduler::new(
		Collaborators {
			host: host.clone(),
			source: Arc::new(HoverContentSource::new(provider, PassthroughRenderer)),
			sink,
			indicator,
		},
		config,
	);

	let (events, rx) = mpsc::unbounded_channel();
	let mut panel = DocsPanel::open(scheduler.clone(), rx);
	scheduler.wait_idle().await;

	let total = script.steps.len();
	for (index, step) in script.steps.into_iter().enumerate() {
		debug!(index, ?step, "replay.step");
		let Some(event) = apply(&host, step).await.with_context(|| format!("step {index} failed"))? else {
			continue;
		};
		events.send(event).context("panel stopped listening")?;
		// Let the listener route the event before the next step.
		tokio::task::yield_now().await;
	}

	scheduler.wait_idle().await;
	panel.dispose();
	info!(steps = total, "replay.done");
	Ok(())
}

/// Applies one editor step to the host and returns the event it raises.
async fn apply(host: &ScriptHost, step: Step) -> anyhow::Result<Option<PanelEvent>> {
	let event = match step {
		Step::Open(locator) => {
			host.open(&locator)?;
			PanelEvent::ActiveEditorChanged
		}
		Step::Close => {
			host.close();
			PanelEvent::ActiveEditorChanged
		}
		Step::Cursor(position) => {
			host.set_cursor(position)?;
			PanelEvent::SelectionChanged
		}
		Step::Insert(text) => {
			host.insert(&text)?;
			PanelEvent::SelectionChanged
		}
		Step::Show => PanelEvent::VisibilityChanged { visible: true },
		Step::Hide => PanelEvent::VisibilityChanged { visible: false },
		Step::Invalidate => PanelEvent::ContentInvalidated,
		Step::WaitMs(ms) => {
			tokio::time::sleep(Duration::from_millis(ms)).await;
			return Ok(None);
		}
	};
	Ok(Some(event))
}

#[cfg(test)]
mod tests {
	use docpane_panel::{NoProgress, PanelMessage};
	use parking_lot::Mutex;
	use pretty_assertions::assert_eq;

	use super::*;

	#[derive(Default)]
	struct Recorder(Mutex<Vec<PanelMessage>>);

	impl PresentationSink for Recorder {
		fn post(&self, message: PanelMessage) {
			self.0.lock().push(message);
		}
	}

	const SCRIPT_HEAD: &str = r#"
		"latency_ms": 50,
		"documents": [{ "uri": "file:///a.rs", "text": "let total = sum(xs);" }],
		"hovers": { "sum": "Adds things." },
	"#;

	async fn run(steps: &str) -> Vec<PanelMessage> {
		let script = Script::from_json(&format!("{{ {SCRIPT_HEAD} \"steps\": {steps} }}")).unwrap();
		let recorder = Arc::new(Recorder::default());
		replay(script, PanelConfig::default(), recorder.clone(), Arc::new(NoProgress)).await.unwrap();
		recorder.0.lock().clone()
	}

	fn no_content() -> PanelMessage {
		PanelMessage::no_content(PanelConfig::default().no_content_message)
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn renders_hover_under_cursor() {
		let messages = run(
			r#"[
				{ "open": "file:///a.rs" }, { "wait_ms": 100 },
				{ "cursor": { "line": 0, "character": 13 } }, { "wait_ms": 100 },
				{ "cursor": { "line": 0, "character": 14 } }, { "wait_ms": 100 },
				"hide",
				"show"
			]"#,
		)
		.await;

		assert_eq!(
			messages,
			vec![
				no_content(),
				no_content(),
				PanelMessage::update("Adds things."),
				PanelMessage::update("Adds things."),
			]
		);
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn quick_moves_only_render_the_last_position() {
		let messages = run(
			r#"[
				{ "open": "file:///a.rs" },
				{ "cursor": { "line": 0, "character": 13 } }
			]"#,
		)
		.await;

		assert_eq!(messages, vec![no_content(), PanelMessage::update("Adds things.")]);
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn finishes_when_the_last_fetch_settles() {
		let start = tokio::time::Instant::now();
		let messages = run(
			r#"[
				{ "open": "file:///a.rs" },
				{ "cursor": { "line": 0, "character": 13 } }
			]"#,
		)
		.await;

		assert_eq!(start.elapsed(), Duration::from_millis(50));
		assert_eq!(messages.last(), Some(&PanelMessage::update("Adds things.")));
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn invalid_step_reports_its_index() {
		let script = Script::from_json(&format!("{{ {SCRIPT_HEAD} \"steps\": [{{ \"cursor\": {{ \"line\": 0, \"character\": 0 }} }}] }}")).unwrap();
		let err = replay(script, PanelConfig::default(), Arc::new(Recorder::default()), Arc::new(NoProgress))
			.await
			.unwrap_err();
		assert!(err.to_string().contains("step 0"));
	}
}
