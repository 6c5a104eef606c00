//! Update scheduling and cache guarding for the documentation panel.
//!
//! Cursor movement fires far more often than the documentation under the
//! cursor changes. [`UpdateScheduler::trigger`] filters those events through
//! a [`CacheKey`] comparison and serializes the fetches that remain.
//!
//! # Lifecycle
//!
//! The scheduler is either idle or fetching. Each accepted trigger:
//!
//! 1. replaces the stored cache key (never rolled back, even if the fetch is
//!    later cancelled),
//! 2. cancels the current [`LoadingToken`], if any,
//! 3. installs a fresh token and spawns the fetch.
//!
//! Steps 1-3 run synchronously inside `trigger`, before anything is awaited.
//! The host is read and the key stored under one lock, so triggers racing on
//! different threads still take effect in the order they observed the host,
//! and the last one owns "current".
//!
//! # Output
//!
//! A fetch writes to the sink only if its token is still current and not
//! cancelled when it settles: non-empty content sends an update, empty
//! content sends the configured no-content notice. Superseded fetches are
//! dropped silently. Source failures are logged and produce no output.
//!
//! # Progress
//!
//! Each fetch races a hold-off timer. If the fetch is still running when the
//! timer fires and has not been cancelled, the progress indicator is shown
//! until the fetch settles and its result has been posted.
//!
//! # Disposal
//!
//! [`UpdateScheduler::dispose`] cancels the current token and turns every
//! later trigger and every in-flight completion into a no-op.

use std::sync::Arc;
use std::time::Duration;

use docpane_primitives::{CacheKey, EditorSnapshot};
use docpane_worker::{CancelSignal, GenerationClock, LoadingToken, Settled, TaskClass, join_error_panic_message, settle_with_delay, spawn};
use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, error, trace, warn};

use crate::config::PanelConfig;
use crate::error::SourceError;
use crate::host::{Content, ContentSource, EditorHost, PresentationSink, ProgressIndicator};
use crate::message::PanelMessage;

/// Host capabilities the scheduler depends on.
#[derive(Clone)]
pub struct Collaborators {
	/// Active editor state.
	pub host: Arc<dyn EditorHost>,
	/// Documentation provider.
	pub source: Arc<dyn ContentSource>,
	/// Panel receiving rendered output.
	pub sink: Arc<dyn PresentationSink>,
	/// Progress indicator for slow fetches.
	pub indicator: Arc<dyn ProgressIndicator>,
}

/// How one triggered update ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
	/// Documentation was posted to the sink.
	Rendered,
	/// The no-content notice was posted to the sink.
	NoContent,
	/// A later trigger took over before this fetch settled.
	Superseded,
	/// The content source failed; nothing was posted.
	Failed(SourceError),
	/// The scheduler was disposed before this fetch settled.
	Disposed,
}

/// Handle to one triggered update.
///
/// Dropping the handle detaches the update; it still runs to completion.
#[derive(Debug)]
pub struct UpdateHandle {
	signal: CancelSignal,
	task: JoinHandle<UpdateOutcome>,
}

impl UpdateHandle {
	/// Returns the generation of this update's loading token.
	pub fn generation(&self) -> u64 {
		self.signal.generation()
	}

	/// Returns the cancel signal of this update's loading token.
	pub fn signal(&self) -> &CancelSignal {
		&self.signal
	}

	/// Waits for the update to settle.
	pub async fn outcome(self) -> UpdateOutcome {
		match self.task.await {
			Ok(outcome) => outcome,
			Err(err) => match join_error_panic_message(err) {
				Some(msg) => {
					error!(generation = self.signal.generation(), panic = %msg, "update.panicked");
					UpdateOutcome::Failed(SourceError::Panicked(msg))
				}
				None => UpdateOutcome::Superseded,
			},
		}
	}
}

struct SchedulerState {
	current_key: CacheKey,
	loading: Option<LoadingToken>,
	config: PanelConfig,
	disposed: bool,
}

struct Inner {
	collaborators: Collaborators,
	clock: GenerationClock,
	state: Mutex<SchedulerState>,
	/// Signalled whenever the in-flight slot empties.
	idle: Notify,
}

/// Decides when panel content must be refetched and runs those fetches.
///
/// Cloning yields another handle to the same scheduler.
#[derive(Clone)]
pub struct UpdateScheduler {
	inner: Arc<Inner>,
}

impl UpdateScheduler {
	/// Creates an idle scheduler whose current key is [`CacheKey::None`].
	pub fn new(collaborators: Collaborators, config: PanelConfig) -> Self {
		Self {
			inner: Arc::new(Inner {
				collaborators,
				clock: GenerationClock::new(),
				state: Mutex::new(SchedulerState {
					current_key: CacheKey::None,
					loading: None,
					config,
					disposed: false,
				}),
				idle: Notify::new(),
			}),
		}
	}

	/// Reconsiders whether the panel needs new content.
	///
	/// Returns `None` when nothing was scheduled: the key is unchanged and
	/// `force_refresh` is false, or the scheduler is disposed.
	pub fn trigger(&self, force_refresh: bool) -> Option<UpdateHandle> {
		let (editor, previous, signal, delay, view_id) = {
			let mut state = self.inner.state.lock();
			if state.disposed {
				trace!("update.skip_disposed");
				return None;
			}
			// Read under the lock so concurrent triggers store keys in the
			// order they observed the host.
			let editor = self.inner.collaborators.host.active_editor();
			let key = CacheKey::from_snapshot(editor.as_ref());
			if !force_refresh && state.current_key.matches(&key) {
				trace!(locator = ?key.locator(), "update.cache_hit");
				return None;
			}

			state.current_key = key;
			let previous = state.loading.take();
			let token = LoadingToken::new(self.inner.clock.next());
			let signal = token.signal();
			state.loading = Some(token);
			(editor, previous, signal, state.config.indicator_delay(), state.config.view_id.clone())
		};

		if let Some(previous) = previous {
			debug!(generation = previous.generation(), "update.cancel_previous");
			previous.cancel();
		}

		debug!(
			generation = signal.generation(),
			forced = force_refresh,
			locator = ?editor.as_ref().map(|e| e.locator.as_str()),
			"update.start"
		);
		let task = spawn(TaskClass::Fetch, run_update(Arc::clone(&self.inner), editor, signal.clone(), delay, view_id));
		Some(UpdateHandle { signal, task })
	}

	/// Replaces the configuration used by later updates. Never fetches.
	pub fn update_configuration(&self, config: PanelConfig) {
		debug!(?config, "update.configuration");
		self.inner.state.lock().config = config;
	}

	/// Returns the current configuration.
	pub fn config(&self) -> PanelConfig {
		self.inner.state.lock().config.clone()
	}

	/// Returns the key of the most recently accepted trigger.
	pub fn current_key(&self) -> CacheKey {
		self.inner.state.lock().current_key.clone()
	}

	/// Returns true while a fetch is in flight.
	pub fn is_fetching(&self) -> bool {
		self.inner.state.lock().loading.is_some()
	}

	/// Waits until no fetch is in flight.
	///
	/// Returns immediately when idle. A trigger that starts a new fetch while
	/// this is pending extends the wait.
	pub async fn wait_idle(&self) {
		loop {
			let mut notified = std::pin::pin!(self.inner.idle.notified());
			notified.as_mut().enable();
			if !self.is_fetching() {
				return;
			}
			notified.await;
		}
	}

	/// Returns true once [`Self::dispose`] has run.
	pub fn is_disposed(&self) -> bool {
		self.inner.state.lock().disposed
	}

	/// Cancels any in-flight fetch and stops all further sink writes.
	///
	/// Idempotent.
	pub fn dispose(&self) {
		let previous = {
			let mut state = self.inner.state.lock();
			if state.disposed {
				return;
			}
			state.disposed = true;
			let previous = state.loading.take();
			self.inner.idle.notify_waiters();
			previous
		};
		debug!(in_flight = previous.is_some(), "update.dispose");
		if let Some(previous) = previous {
			previous.cancel();
		}
	}
}

async fn run_update(inner: Arc<Inner>, editor: Option<EditorSnapshot>, signal: CancelSignal, delay: Duration, view_id: String) -> UpdateOutcome {
	let source = Arc::clone(&inner.collaborators.source);
	let fetch_signal = signal.clone();
	let fetch = async move {
		match editor {
			Some(editor) => source.fetch(&editor, fetch_signal).await,
			None => Ok(Content::Empty),
		}
	};

	let _slot = SlotRelease {
		inner: &inner,
		generation: signal.generation(),
	};
	let indicator = Arc::clone(&inner.collaborators.indicator);
	let (settled, progress) = settle_with_delay(fetch, delay, &signal, || indicator.show(&view_id)).await;
	let outcome = inner.finish(&signal, settled);
	drop(progress);
	outcome
}

/// Frees the in-flight slot if a fetch task unwinds while still current.
struct SlotRelease<'a> {
	inner: &'a Inner,
	generation: u64,
}

impl Drop for SlotRelease<'_> {
	fn drop(&mut self) {
		let mut state = self.inner.state.lock();
		if state.loading.as_ref().is_some_and(|token| token.generation() == self.generation) {
			state.loading = None;
			self.inner.idle.notify_waiters();
		}
	}
}

impl Inner {
	fn finish(&self, signal: &CancelSignal, settled: Settled<Result<Content, SourceError>>) -> UpdateOutcome {
		let generation = signal.generation();
		let mut state = self.state.lock();
		if state.disposed {
			debug!(generation, "update.dropped_disposed");
			return UpdateOutcome::Disposed;
		}

		let is_current = state.loading.as_ref().is_some_and(|token| token.generation() == generation);
		let result = match settled {
			Settled::Completed(result) if is_current && !signal.is_cancelled() => result,
			_ => {
				debug!(generation, "update.superseded");
				return UpdateOutcome::Superseded;
			}
		};
		state.loading = None;
		self.idle.notify_waiters();

		match result {
			Ok(Content::Html(body)) if !body.is_empty() => {
				debug!(generation, bytes = body.len(), "update.rendered");
				self.collaborators.sink.post(PanelMessage::update(body));
				UpdateOutcome::Rendered
			}
			Ok(_) => {
				debug!(generation, "update.no_content");
				self.collaborators.sink.post(PanelMessage::no_content(state.config.no_content_message.clone()));
				UpdateOutcome::NoContent
			}
			Err(err) => {
				warn!(generation, error = %err, "update.source_failed");
				UpdateOutcome::Failed(err)
			}
		}
	}
}
