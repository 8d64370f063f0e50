//! # Storage Layer
//!
//! Storage is abstracted behind the [`DataStore`] trait so the command layer
//! and the sampler can be tested against [`memory::InMemoryStore`] without
//! touching the filesystem, while [`fs::FileStore`] provides the production
//! backend.
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── quotes.json            # Full quote collection (pretty, ASCII-escaped)
//! ├── quotes_history.txt     # Draw ledger: "YYYY-MM-DD HH:MM:SS, <index>"
//! └── quotes_history.txt.bak # Pre-reset snapshot (one generation)
//! ```
//!
//! The quote store is pure data interchange: full-file overwrite on save,
//! full-file read on load. The history ledger is append-only between resets;
//! a reset copies the ledger to its backup path before truncating it.

use crate::error::Result;
use crate::model::{HistoryEntry, Quote};

pub mod fs;
pub mod memory;

/// Timestamp format shared by the ledger and the normalized quote dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Abstract interface over the quote store and the history ledger.
pub trait DataStore {
    /// Overwrite the persisted quote collection.
    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()>;

    /// Load the full quote collection. An empty collection is a valid result
    /// (quiet success); a missing store file is `NotFound`.
    fn load_quotes(&self) -> Result<Vec<Quote>>;

    /// Load every recorded draw. A missing ledger means empty history.
    fn load_history(&self) -> Result<Vec<HistoryEntry>>;

    /// Record one draw, stamped with the current local time.
    fn append_history(&mut self, index: usize) -> Result<()>;

    /// Snapshot the ledger to its backup and truncate it. No-op when the
    /// ledger does not exist.
    fn reset_history(&mut self) -> Result<()>;
}
