use std::any::Any;

use tokio::task::JoinError;

/// Returns the panic message of a failed task.
///
/// `None` when the task was aborted rather than panicking, or when the panic
/// payload is not a string.
pub fn join_error_panic_message(err: JoinError) -> Option<String> {
	err.try_into_panic().ok().and_then(|payload| payload_message(payload.as_ref()))
}

fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
	payload
		.downcast_ref::<&'static str>()
		.map(|msg| (*msg).to_owned())
		.or_else(|| payload.downcast_ref::<String>().cloned())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[tokio::test(flavor = "current_thread")]
	async fn literal_and_formatted_panics() {
		let literal = tokio::spawn(async { panic!("source exploded") }).await.unwrap_err();
		assert_eq!(join_error_panic_message(literal).as_deref(), Some("source exploded"));

		let id = 7;
		let formatted = tokio::spawn(async move { panic!("fetch {id} exploded") }).await.unwrap_err();
		assert_eq!(join_error_panic_message(formatted).as_deref(), Some("fetch 7 exploded"));
	}

	#[tokio::test(flavor = "current_thread")]
	async fn non_string_payload_has_no_message() {
		let err = tokio::spawn(async { std::panic::panic_any(42_u32) }).await.unwrap_err();
		assert_eq!(join_error_panic_message(err), None);
	}

	#[tokio::test(flavor = "current_thread", start_paused = true)]
	async fn aborted_task_is_not_a_panic() {
		let handle = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
		handle.abort();
		assert_eq!(join_error_panic_message(handle.await.unwrap_err()), None);
	}
}
