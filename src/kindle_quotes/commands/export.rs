use std::path::Path;

use crate::clippings;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Parse a clippings export and overwrite the quote store with the result.
///
/// Malformed entries are skipped with a per-entry warning rather than
/// aborting: one corrupt highlight must not block a whole device export.
pub fn run<S: DataStore>(store: &mut S, clippings_path: &Path) -> Result<CmdResult> {
    let entries = clippings::read_entries(clippings_path)?;

    let mut result = CmdResult::default();
    let mut quotes = Vec::with_capacity(entries.len());
    for (num, entry) in entries.iter().enumerate() {
        match clippings::parse_entry(entry) {
            Ok(quote) => quotes.push(quote),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Skipping entry {}: {e}",
                num + 1
            ))),
        }
    }

    store.save_quotes(&quotes)?;
    result.add_message(CmdMessage::success(format!(
        "Exported {} quotes.",
        quotes.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuotesError;
    use crate::store::memory::InMemoryStore;
    use std::fs;

    const CLIPPINGS: &str = "\
John Wick (John Wick;Baba Yaga)\n\
- Your Highlight on Page 17 | Location 311-313 | Added on Saturday, February 8, 2024 10:41:17 PM\n\
\n\
Est adipisci eius tempora aliquam amet.\n\
==========\n\
Broken Book (Author)\n\
- Your Highlight on garbage without delimiter\n\
body\n\
==========\n\
Lorem Ipsum (1st edition) (\u{160}pa\u{10d}ek, Karel)\n\
- Your Highlight on Page 18 | Location 322-324 | Added on Saturday, February 8, 2024 10:45:05 PM\n\
\n\
Consectetur neque adipisci tempora.\n\
==========\n";

    #[test]
    fn exports_parsed_quotes_and_skips_malformed() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("My Clippings.txt");
        fs::write(&path, CLIPPINGS).unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &path).unwrap();

        let saved = store.load_quotes().unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].title, "John Wick");
        assert_eq!(saved[1].title, "Lorem Ipsum (1st edition)");

        // One warning for the broken entry, one success summary.
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[0].content.contains("Skipping entry 2"));
        assert!(result.messages[1].content.contains("Exported 2 quotes."));
    }

    #[test]
    fn missing_clippings_file_fails() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, Path::new("/no/such/file")).unwrap_err();
        assert!(matches!(err, QuotesError::NotFound(_)));
    }

    #[test]
    fn empty_export_saves_empty_store() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("My Clippings.txt");
        fs::write(&path, "==========\n").unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &path).unwrap();
        assert!(store.load_quotes().unwrap().is_empty());
        assert!(result.messages[0].content.contains("Exported 0 quotes."));
    }
}
