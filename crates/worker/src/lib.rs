//! Worker primitives for the documentation panel.
//!
//! - [`spawn`]: runtime-aware task spawning tagged with a [`TaskClass`].
//! - [`LoadingToken`] / [`CancelSignal`]: one-shot cooperative cancellation
//!   with a single owner and any number of observers.
//! - [`settle_with_delay`]: races work against a hold-off timer so slow work
//!   can surface a progress indicator without delaying fast work.

mod join;
mod settle;
mod spawn;
mod token;

pub use join::join_error_panic_message;
pub use settle::{Settled, settle_with_delay};
pub use spawn::{TaskClass, spawn};
pub use token::{CancelSignal, GenerationClock, LoadingToken};
