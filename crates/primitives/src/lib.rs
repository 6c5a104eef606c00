//! Core value types for the documentation panel: locators, positions, word
//! ranges, editor snapshots and the cache keys derived from them.

/// Cache keys used to detect when panel content is stale.
pub mod cache_key;
/// Opaque document identifiers.
pub mod locator;
/// Line/character positions and rope conversions.
pub mod position;
/// Read-only view of the active editor.
pub mod snapshot;
/// Word detection under the cursor.
pub mod word;

pub use cache_key::CacheKey;
pub use locator::DocumentLocator;
pub use position::{CharIdx, TextPosition, char_to_position, position_to_char};
pub use ropey::{Rope, RopeSlice};
pub use snapshot::EditorSnapshot;
pub use word::{WordRange, is_word_char, word_range_at};
