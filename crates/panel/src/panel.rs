//! Event routing for an open documentation panel.

use docpane_worker::{TaskClass, spawn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::config::PanelConfig;
use crate::scheduler::{UpdateHandle, UpdateScheduler};

/// Host notifications a panel reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
	/// A different editor (or none) became active.
	ActiveEditorChanged,
	/// The cursor or selection moved in the active editor.
	SelectionChanged,
	/// The panel was shown or hidden.
	VisibilityChanged {
		/// Whether the panel is now visible.
		visible: bool,
	},
	/// The content source reported that its documentation changed.
	ContentInvalidated,
	/// Panel settings changed.
	ConfigurationChanged(PanelConfig),
}

impl PanelEvent {
	const fn name(&self) -> &'static str {
		match self {
			Self::ActiveEditorChanged => "active_editor_changed",
			Self::SelectionChanged => "selection_changed",
			Self::VisibilityChanged { .. } => "visibility_changed",
			Self::ContentInvalidated => "content_invalidated",
			Self::ConfigurationChanged(_) => "configuration_changed",
		}
	}
}

/// Routes one event to the scheduler.
///
/// Returns the scheduled update, if the event led to one.
pub fn route_event(scheduler: &UpdateScheduler, event: PanelEvent) -> Option<UpdateHandle> {
	trace!(event = event.name(), "panel.event");
	match event {
		PanelEvent::ActiveEditorChanged | PanelEvent::SelectionChanged => scheduler.trigger(false),
		PanelEvent::VisibilityChanged { visible: true } | PanelEvent::ContentInvalidated => scheduler.trigger(true),
		PanelEvent::VisibilityChanged { visible: false } => None,
		PanelEvent::ConfigurationChanged(config) => {
			scheduler.update_configuration(config);
			None
		}
	}
}

/// An open documentation panel.
///
/// Owns its scheduler and the subscription to host events. Dropping the
/// panel disposes both.
pub struct DocsPanel {
	scheduler: UpdateScheduler,
	listener: Option<JoinHandle<()>>,
}

impl DocsPanel {
	/// Opens a panel, subscribes it to `events` and schedules the first update.
	pub fn open(scheduler: UpdateScheduler, mut events: mpsc::UnboundedReceiver<PanelEvent>) -> Self {
		let listener_scheduler = scheduler.clone();
		let listener = spawn(TaskClass::Events, async move {
			while let Some(event) = events.recv().await {
				route_event(&listener_scheduler, event);
			}
			trace!("panel.events_closed");
		});

		debug!("panel.open");
		scheduler.trigger(false);
		Self {
			scheduler,
			listener: Some(listener),
		}
	}

	/// Returns the panel's scheduler.
	pub fn scheduler(&self) -> &UpdateScheduler {
		&self.scheduler
	}

	/// Returns true once the panel has been disposed.
	pub fn is_disposed(&self) -> bool {
		self.listener.is_none()
	}

	/// Detaches from host events and cancels any in-flight update.
	///
	/// Idempotent.
	pub fn dispose(&mut self) {
		let Some(listener) = self.listener.take() else {
			return;
		};
		listener.abort();
		self.scheduler.dispose();
		debug!("panel.dispose");
	}
}

impl Drop for DocsPanel {
	fn drop(&mut self) {
		self.dispose();
	}
}
