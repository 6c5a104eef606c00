//! Racing work against a hold-off delay.
//!
//! [`settle_with_delay`] drives a future to completion while a timer runs
//! alongside it. If the timer fires first and the work has not been
//! cancelled, a side effect (typically a progress indicator) is started and
//! handed back with the result. Fast work never triggers the side effect, and
//! the timer never changes the work's result or timing.

use std::future::Future;
use std::time::Duration;

use crate::token::CancelSignal;

/// Result of [`settle_with_delay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
	/// The work finished before cancellation was observed.
	Completed(T),
	/// Cancellation was requested before the work finished; the work was
	/// dropped.
	Cancelled,
}

impl<T> Settled<T> {
	/// Returns the completed value, if any.
	pub fn completed(self) -> Option<T> {
		match self {
			Self::Completed(value) => Some(value),
			Self::Cancelled => None,
		}
	}
}

/// Runs `work` to completion, calling `on_slow` if it is still pending after
/// `delay`.
///
/// `on_slow` runs at most once, and only if `signal` is not cancelled when
/// the delay elapses. When the work completes, the value `on_slow` returned
/// is handed back alongside the output so the caller can keep it alive while
/// it acts on the result. On cancellation it is dropped before returning.
/// Cancellation wins over a simultaneous completion.
pub async fn settle_with_delay<F, G>(work: F, delay: Duration, signal: &CancelSignal, on_slow: impl FnOnce() -> G) -> (Settled<F::Output>, Option<G>)
where
	F: Future,
{
	tokio::pin!(work);

	tokio::select! {
		biased;
		() = signal.cancelled() => return (Settled::Cancelled, None),
		out = &mut work => return (Settled::Completed(out), None),
		() = tokio::time::sleep(delay) => {}
	}

	if signal.is_cancelled() {
		return (Settled::Cancelled, None);
	}

	tracing::trace!(generation = signal.generation(), delay_ms = delay.as_millis() as u64, "settle.slow");
	let guard = on_slow();

	tokio::select! {
		biased;
		() = signal.cancelled() => (Settled::Cancelled, None),
		out = &mut work => (Settled::Completed(out), Some(guard)),
	}
}
