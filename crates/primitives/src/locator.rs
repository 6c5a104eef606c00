use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies an open document.
///
/// Opaque to the panel: two locators refer to the same document iff their
/// string forms are equal. Hosts typically use the document URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentLocator(String);

impl DocumentLocator {
	/// Creates a locator from its string form.
	pub fn new(locator: impl Into<String>) -> Self {
		Self(locator.into())
	}

	/// Returns the string form of this locator.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DocumentLocator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for DocumentLocator {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for DocumentLocator {
	fn from(value: String) -> Self {
		Self(value)
	}
}
