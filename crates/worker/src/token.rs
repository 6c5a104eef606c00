//! Loading tokens and their read-only cancel signals.
//!
//! A [`LoadingToken`] stands for one in-flight piece of work. Whoever owns
//! the token is the only party able to cancel it; the work itself receives a
//! [`CancelSignal`], which can observe cancellation, register callbacks and
//! derive child tokens for nested async work, but cannot cancel.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Monotonic generation clock for loading tokens.
#[derive(Debug, Default, Clone)]
pub struct GenerationClock {
	next: Arc<AtomicU64>,
}

impl GenerationClock {
	/// Creates a new generation clock starting at generation 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the next generation ID.
	pub fn next(&self) -> u64 {
		self.next.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
	}
}

type CancelCallback = Box<dyn FnOnce() + Send + 'static>;

struct Shared {
	generation: u64,
	cancel: CancellationToken,
	/// Pending callbacks; `None` once cancellation has fired.
	callbacks: Mutex<Option<Vec<CancelCallback>>>,
}

/// Owning handle for one in-flight load.
///
/// The cancellation flag starts clear and can be set exactly once.
pub struct LoadingToken {
	shared: Arc<Shared>,
}

impl LoadingToken {
	/// Creates an uncancelled token for the given generation.
	pub fn new(generation: u64) -> Self {
		Self {
			shared: Arc::new(Shared {
				generation,
				cancel: CancellationToken::new(),
				callbacks: Mutex::new(Some(Vec::new())),
			}),
		}
	}

	/// Returns generation ID.
	pub fn generation(&self) -> u64 {
		self.shared.generation
	}

	/// Returns true when cancellation has been requested.
	pub fn is_cancelled(&self) -> bool {
		self.shared.cancel.is_cancelled()
	}

	/// Requests cancellation and runs registered callbacks.
	///
	/// Returns `false` if the token was already cancelled.
	pub fn cancel(&self) -> bool {
		// Flag first: a callback registered from here on sees `is_cancelled`.
		self.shared.cancel.cancel();
		let Some(callbacks) = self.shared.callbacks.lock().take() else {
			return false;
		};
		tracing::trace!(generation = self.shared.generation, callbacks = callbacks.len(), "loading_token.cancel");
		for callback in callbacks {
			callback();
		}
		true
	}

	/// Returns a read-only signal for the work this token guards.
	pub fn signal(&self) -> CancelSignal {
		CancelSignal {
			shared: Arc::clone(&self.shared),
		}
	}
}

impl fmt::Debug for LoadingToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LoadingToken")
			.field("generation", &self.shared.generation)
			.field("cancelled", &self.is_cancelled())
			.finish()
	}
}

/// Read-only view of a [`LoadingToken`]'s cancellation state.
#[derive(Clone)]
pub struct CancelSignal {
	shared: Arc<Shared>,
}

impl CancelSignal {
	/// Returns the generation of the owning token.
	pub fn generation(&self) -> u64 {
		self.shared.generation
	}

	/// Returns true when cancellation has been requested.
	pub fn is_cancelled(&self) -> bool {
		self.shared.cancel.is_cancelled()
	}

	/// Future resolving when cancellation is requested.
	pub async fn cancelled(&self) {
		self.shared.cancel.cancelled().await;
	}

	/// Creates a child token that is cancelled together with this signal.
	///
	/// Use this to propagate cancellation into nested async work.
	pub fn child_token(&self) -> CancellationToken {
		self.shared.cancel.child_token()
	}

	/// Registers a callback to run once cancellation is requested.
	///
	/// Runs immediately if the token is already cancelled.
	pub fn on_cancel<F>(&self, callback: F)
	where
		F: FnOnce() + Send + 'static,
	{
		let mut callbacks = self.shared.callbacks.lock();
		match callbacks.as_mut() {
			Some(pending) => pending.push(Box::new(callback)),
			None => {
				drop(callbacks);
				callback();
			}
		}
	}
}

impl fmt::Debug for CancelSignal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CancelSignal")
			.field("generation", &self.shared.generation)
			.field("cancelled", &self.is_cancelled())
			.finish()
	}
}
