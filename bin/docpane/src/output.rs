//! Replay output: panel messages as JSON lines, progress as log events.

use std::io::Write;

use docpane_panel::{PanelMessage, PresentationSink, ProgressHandle, ProgressIndicator};
use parking_lot::Mutex;
use tracing::{info, warn};

/// Writes each panel message as one JSON line.
pub struct JsonLinesSink<W> {
	out: Mutex<W>,
}

impl<W> JsonLinesSink<W> {
	pub fn new(out: W) -> Self {
		Self { out: Mutex::new(out) }
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out.into_inner()
	}
}

impl<W: Write + Send> PresentationSink for JsonLinesSink<W> {
	fn post(&self, message: PanelMessage) {
		let mut out = self.out.lock();
		let written = serde_json::to_writer(&mut *out, &message)
			.map_err(std::io::Error::from)
			.and_then(|()| writeln!(out))
			.and_then(|()| out.flush());
		if let Err(error) = written {
			warn!(%error, "sink.write_failed");
		}
	}
}

/// Reports progress through the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogIndicator;

impl ProgressIndicator for LogIndicator {
	fn show(&self, view_id: &str) -> ProgressHandle {
		info!(view_id, "progress.show");
		let view_id = view_id.to_string();
		ProgressHandle::new(move || info!(view_id = %view_id, "progress.hide"))
	}
}
