use super::DataStore;
use crate::error::{QuotesError, Result};
use crate::model::{HistoryEntry, Quote};
use chrono::Local;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    // None mirrors a missing store file; load_quotes must fail on it
    quotes: Option<Vec<Quote>>,
    history: Vec<HistoryEntry>,
    backup: Option<Vec<HistoryEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Some(quotes),
            ..Self::default()
        }
    }

    pub fn backup(&self) -> Option<&[HistoryEntry]> {
        self.backup.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()> {
        self.quotes = Some(quotes.to_vec());
        Ok(())
    }

    fn load_quotes(&self) -> Result<Vec<Quote>> {
        self.quotes
            .clone()
            .ok_or_else(|| QuotesError::NotFound(PathBuf::from("<memory>")))
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.clone())
    }

    fn append_history(&mut self, index: usize) -> Result<()> {
        self.history
            .push(HistoryEntry::new(Local::now().naive_local(), index));
        Ok(())
    }

    fn reset_history(&mut self) -> Result<()> {
        if self.history.is_empty() {
            return Ok(());
        }
        self.backup = Some(std::mem::take(&mut self.history));
        Ok(())
    }
}
