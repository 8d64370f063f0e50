use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One highlighted passage extracted from a clippings export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub title: String,
    // Semicolon-separated in the source line; never empty after parsing
    pub authors: Vec<String>,
    pub location: String,
    /// Normalized to `YYYY-MM-DD HH:MM:SS`.
    pub added_on: String,
    pub quote: String,
}

/// A single draw recorded in the history ledger.
///
/// `index` refers to a position in the most recently loaded quote
/// collection, not a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub added_at: NaiveDateTime,
    pub index: usize,
}

impl HistoryEntry {
    pub fn new(added_at: NaiveDateTime, index: usize) -> Self {
        Self { added_at, index }
    }
}
