//! Panel configuration.
//!
//! Configuration is written in TOML. Every key is optional:
//!
//! ```toml
//! indicator-delay-ms = 250
//! no-content-message = "No documentation found at current cursor position"
//! view-id = "documentation-sidebar.sidebar"
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Delay before a still-running fetch shows the progress indicator.
pub const DEFAULT_INDICATOR_DELAY: Duration = Duration::from_millis(250);

/// Notice shown when the cursor has no documentation.
pub const DEFAULT_NO_CONTENT_MESSAGE: &str = "No documentation found at current cursor position";

/// Identifies the panel to the host, e.g. as the progress indicator location.
pub const DEFAULT_VIEW_ID: &str = "documentation-sidebar.sidebar";

/// Runtime settings for a documentation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PanelConfig {
	/// Milliseconds a fetch may run before the progress indicator appears.
	pub indicator_delay_ms: u64,
	/// Message sent when a fetch finds no documentation.
	pub no_content_message: String,
	/// Host view identifier.
	pub view_id: String,
}

impl Default for PanelConfig {
	fn default() -> Self {
		Self {
			indicator_delay_ms: DEFAULT_INDICATOR_DELAY.as_millis() as u64,
			no_content_message: DEFAULT_NO_CONTENT_MESSAGE.to_string(),
			view_id: DEFAULT_VIEW_ID.to_string(),
		}
	}
}

impl PanelConfig {
	/// Parses configuration from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()
	}

	/// Loads configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&input)
	}

	/// Returns the indicator hold-off delay.
	pub fn indicator_delay(&self) -> Duration {
		Duration::from_millis(self.indicator_delay_ms)
	}

	fn validate(self) -> Result<Self> {
		if self.view_id.trim().is_empty() {
			return Err(ConfigError::Invalid("view-id must not be empty".into()));
		}
		Ok(self)
	}
}
