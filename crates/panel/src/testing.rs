//! In-memory collaborators for scheduler and panel tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use docpane_primitives::{EditorSnapshot, TextPosition, WordRange};
use docpane_worker::CancelSignal;
use parking_lot::Mutex;

use crate::config::PanelConfig;
use crate::error::SourceError;
use crate::host::{Content, ContentSource, EditorHost, PresentationSink, ProgressHandle, ProgressIndicator};
use crate::message::PanelMessage;
use crate::scheduler::{Collaborators, UpdateScheduler};

pub(crate) fn editor_at(uri: &str, version: i32, character: u32, word: Option<(usize, usize)>) -> EditorSnapshot {
	EditorSnapshot::new(
		uri,
		version,
		TextPosition::new(0, character),
		word.map(|(start, end)| WordRange::new(start, end)),
	)
}

#[derive(Default)]
pub(crate) struct FakeHost {
	editor: Mutex<Option<EditorSnapshot>>,
}

impl FakeHost {
	pub(crate) fn set(&self, editor: Option<EditorSnapshot>) {
		*self.editor.lock() = editor;
	}
}

impl EditorHost for FakeHost {
	fn active_editor(&self) -> Option<EditorSnapshot> {
		self.editor.lock().clone()
	}
}

pub(crate) struct Reply {
	delay: Duration,
	result: Result<Content, SourceError>,
	panic: Option<&'static str>,
}

impl Reply {
	pub(crate) fn html(ms: u64, body: &str) -> Self {
		Self {
			delay: Duration::from_millis(ms),
			result: Ok(Content::html(body)),
			panic: None,
		}
	}

	pub(crate) fn empty(ms: u64) -> Self {
		Self {
			delay: Duration::from_millis(ms),
			result: Ok(Content::Empty),
			panic: None,
		}
	}

	pub(crate) fn fail(ms: u64, msg: &str) -> Self {
		Self {
			delay: Duration::from_millis(ms),
			result: Err(SourceError::Provider(msg.to_string())),
			panic: None,
		}
	}

	pub(crate) fn panic(ms: u64, msg: &'static str) -> Self {
		Self {
			panic: Some(msg),
			..Self::empty(ms)
		}
	}
}

/// Replies in push order; empty content once the script runs out.
#[derive(Default)]
pub(crate) struct ScriptedSource {
	replies: Mutex<VecDeque<Reply>>,
	requests: Mutex<Vec<EditorSnapshot>>,
}

impl ScriptedSource {
	pub(crate) fn push(&self, reply: Reply) {
		self.replies.lock().push_back(reply);
	}

	pub(crate) fn calls(&self) -> usize {
		self.requests.lock().len()
	}

	pub(crate) fn requests(&self) -> Vec<EditorSnapshot> {
		self.requests.lock().clone()
	}
}

#[async_trait]
impl ContentSource for ScriptedSource {
	async fn fetch(&self, editor: &EditorSnapshot, _cancel: CancelSignal) -> Result<Content, SourceError> {
		self.requests.lock().push(editor.clone());
		let reply = self.replies.lock().pop_front().unwrap_or_else(|| Reply::empty(0));
		tokio::time::sleep(reply.delay).await;
		if let Some(msg) = reply.panic {
			panic!("{msg}");
		}
		reply.result
	}
}

#[derive(Default)]
pub(crate) struct RecordingSink {
	messages: Mutex<Vec<PanelMessage>>,
}

impl RecordingSink {
	pub(crate) fn messages(&self) -> Vec<PanelMessage> {
		self.messages.lock().clone()
	}
}

impl PresentationSink for RecordingSink {
	fn post(&self, message: PanelMessage) {
		self.messages.lock().push(message);
	}
}

#[derive(Default)]
pub(crate) struct CountingIndicator {
	shown: AtomicUsize,
	released: Arc<AtomicUsize>,
	views: Mutex<Vec<String>>,
}

impl CountingIndicator {
	pub(crate) fn shown(&self) -> usize {
		self.shown.load(Ordering::SeqCst)
	}

	pub(crate) fn released(&self) -> usize {
		self.released.load(Ordering::SeqCst)
	}

	pub(crate) fn views(&self) -> Vec<String> {
		self.views.lock().clone()
	}
}

impl ProgressIndicator for CountingIndicator {
	fn show(&self, view_id: &str) -> ProgressHandle {
		self.shown.fetch_add(1, Ordering::SeqCst);
		self.views.lock().push(view_id.to_string());
		let released = Arc::clone(&self.released);
		ProgressHandle::new(move || {
			released.fetch_add(1, Ordering::SeqCst);
		})
	}
}

pub(crate) struct Harness {
	pub(crate) host: Arc<FakeHost>,
	pub(crate) source: Arc<ScriptedSource>,
	pub(crate) sink: Arc<RecordingSink>,
	pub(crate) indicator: Arc<CountingIndicator>,
	pub(crate) scheduler: UpdateScheduler,
}

impl Harness {
	pub(crate) fn new() -> Self {
		Self::with_config(PanelConfig::default())
	}

	pub(crate) fn with_config(config: PanelConfig) -> Self {
		let host = Arc::new(FakeHost::default());
		let source = Arc::new(ScriptedSource::default());
		let sink = Arc::new(RecordingSink::default());
		let indicator = Arc::new(CountingIndicator::default());
		let scheduler = UpdateScheduler::new(
			Collaborators {
				host: host.clone(),
				source: source.clone(),
				sink: sink.clone(),
				indicator: indicator.clone(),
			},
			config,
		);
		Self {
			host,
			source,
			sink,
			indicator,
			scheduler,
		}
	}
}
