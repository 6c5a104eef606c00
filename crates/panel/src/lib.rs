//! Documentation panel engine.
//!
//! The panel shows documentation for whatever sits under the editor cursor.
//! The host editor is reached only through the collaborator traits in
//! [`host`]; this crate decides *when* to fetch and *what* to post.
//!
//! - [`scheduler::UpdateScheduler`]: cache guard and single-flight fetches.
//! - [`panel::DocsPanel`]: subscribes a scheduler to host events.
//! - [`config::PanelConfig`]: TOML-backed settings.

/// Panel configuration.
pub mod config;
/// Error types.
pub mod error;
/// Host collaborator traits.
pub mod host;
/// Messages posted to the presentation sink.
pub mod message;
/// Event routing for an open panel.
pub mod panel;
/// Update scheduling and cache guarding.
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PanelConfig;
pub use docpane_worker::CancelSignal;
pub use error::{ConfigError, SourceError};
pub use host::{Content, ContentSource, EditorHost, NoProgress, PresentationSink, ProgressHandle, ProgressIndicator};
pub use message::PanelMessage;
pub use panel::{DocsPanel, PanelEvent, route_event};
pub use scheduler::{Collaborators, UpdateHandle, UpdateOutcome, UpdateScheduler};
