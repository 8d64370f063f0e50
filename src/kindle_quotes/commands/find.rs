use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuotesError, Result};
use crate::query::QuoteQuery;
use crate::store::DataStore;

/// Filter the stored quotes by the given criteria, keeping store order.
pub fn run<S: DataStore>(store: &S, query: &QuoteQuery) -> Result<CmdResult> {
    // Validate before touching the store so a missing store file does not
    // mask the real problem.
    if query.is_empty() {
        return Err(QuotesError::InvalidQuery);
    }

    let quotes = store.load_quotes()?;
    let matches: Vec<_> = query.filter(&quotes)?.into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No quotes found."));
    }
    Ok(result.with_quotes(matches))
}
