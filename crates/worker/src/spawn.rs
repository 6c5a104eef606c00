use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

/// What a spawned task does, recorded on the `worker.spawn` trace event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Fetches content for the panel.
	Fetch,
	/// Routes host events into a scheduler.
	Events,
}

impl TaskClass {
	const fn as_str(self) -> &'static str {
		match self {
			Self::Fetch => "fetch",
			Self::Events => "events",
		}
	}
}

/// Fallback runtime for hosts that trigger updates off any tokio runtime.
fn fallback_runtime() -> std::io::Result<&'static Runtime> {
	static FALLBACK: OnceLock<Runtime> = OnceLock::new();
	if let Some(runtime) = FALLBACK.get() {
		return Ok(runtime);
	}
	let runtime = Builder::new_multi_thread()
		.enable_all()
		.worker_threads(1)
		.thread_name("docpane-worker")
		.build()?;
	Ok(FALLBACK.get_or_init(|| runtime))
}

/// Spawns `fut` on the current runtime, or on a shared single-thread
/// fallback runtime when called outside of one.
///
/// # Panics
///
/// Panics if there is no current runtime and the fallback runtime cannot be
/// started.
pub fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), "worker.spawn");
	match Handle::try_current() {
		Ok(handle) => handle.spawn(fut),
		Err(_) => match fallback_runtime() {
			Ok(runtime) => runtime.spawn(fut),
			Err(err) => panic!("no tokio runtime and the fallback failed to start: {err}"),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test(flavor = "current_thread")]
	async fn runs_on_the_callers_runtime() {
		let caller = std::thread::current().id();
		let handle = spawn(TaskClass::Fetch, async move { std::thread::current().id() == caller });
		assert_eq!(handle.await.ok(), Some(true));
	}

	#[test]
	fn falls_back_outside_a_runtime() {
		let handle = spawn(TaskClass::Events, async { std::thread::current().name().map(str::to_owned) });
		let runtime = Builder::new_current_thread().build().unwrap();
		assert_eq!(runtime.block_on(handle).ok().flatten().as_deref(), Some("docpane-worker"));
	}
}
