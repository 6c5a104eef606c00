//! Error types for content fetching and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors a content source can report for one fetch.
///
/// None of these reach the user; the scheduler logs them and leaves the
/// panel showing its previous content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
	/// The underlying documentation provider failed.
	#[error("content provider failed: {0}")]
	Provider(String),

	/// Documentation was found but could not be rendered.
	#[error("markdown rendering failed: {0}")]
	Render(String),

	/// The fetch task panicked.
	#[error("content fetch panicked: {0}")]
	Panicked(String),
}

/// Errors that can occur when loading panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or types.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is not usable.
	#[error("invalid configuration: {0}")]
	Invalid(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
