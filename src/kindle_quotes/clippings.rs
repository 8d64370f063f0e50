//! Parser for the Kindle "My Clippings.txt" export format.
//!
//! The file is a loosely-delimited text blob: entries separated by a line of
//! ten `=` characters, each highlight spanning a title/author line, a
//! metadata line and the highlighted text. Bookmarks and notes share the
//! format and are filtered out by the highlight marker.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{QuotesError, Result};
use crate::model::Quote;

const ENTRY_SEPARATOR: &str = "==========";
const HIGHLIGHT_MARKER: &str = "- Your Highlight on ";
const ADDED_ON_PREFIX: &str = "Added on ";

// Device timestamps look like "Saturday, February 8, 2024 10:41:17 PM". The
// weekday is parsed separately and not cross-checked against the date: real
// exports contain mismatched weekdays and the parse must tolerate them.
const DEVICE_DATE_FORMAT: &str = "%B %d, %Y %I:%M:%S %p";
const STORE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One raw highlight entry: the surviving lines of a separator-delimited
/// fragment, blank lines already removed. Kept as a raw line list so
/// malformed entries (fewer than 3 lines) are representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub lines: Vec<String>,
}

/// Read a clippings export and segment it into highlight entries.
///
/// Fails with [`QuotesError::NotFound`] when the file does not exist.
/// Bookmark and note entries are discarded here; per-entry field problems
/// surface later, from [`parse_entry`].
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(QuotesError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(split_entries(&content))
}

/// Segment raw clippings text into highlight entries.
///
/// The last line of the trimmed file is the trailing separator artifact and
/// is dropped, as are blank lines (which also collapses multi-paragraph
/// highlights into one line per paragraph).
pub fn split_entries(content: &str) -> Vec<Entry> {
    let lines: Vec<&str> = content.trim().lines().collect();
    let body = lines[..lines.len().saturating_sub(1)]
        .iter()
        .filter(|line| !line.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    body.split(&format!("{ENTRY_SEPARATOR}\n"))
        .filter(|fragment| fragment.contains(HIGHLIGHT_MARKER))
        .map(|fragment| Entry {
            lines: fragment.trim().lines().map(str::to_string).collect(),
        })
        .collect()
}

/// Extract the structured fields of a single highlight entry.
pub fn parse_entry(entry: &Entry) -> Result<Quote> {
    if entry.lines.len() < 3 {
        return Err(QuotesError::Entry(format!(
            "expected at least 3 lines, got {}",
            entry.lines.len()
        )));
    }

    // The *last* " (" segment is the author list; titles may themselves
    // contain parentheses ("Lorem Ipsum (1st edition) (Author, Name)").
    let (title, author_part) = entry.lines[0]
        .rsplit_once(" (")
        .ok_or_else(|| QuotesError::Entry(format!("no author parenthetical: {}", entry.lines[0])))?;
    let authors: Vec<String> = author_part
        .trim_end_matches(')')
        .split(';')
        .map(str::to_string)
        .collect();

    // Metadata line: "[- Your Highlight on Page N | ]Location A-B | Added on <date>".
    let info: Vec<&str> = entry.lines[1].split(" | ").collect();
    if info.len() < 2 {
        return Err(QuotesError::Entry(format!(
            "no \" | \" delimiter in metadata line: {}",
            entry.lines[1]
        )));
    }
    let location_tokens: Vec<&str> = info[0].split_whitespace().collect();
    let location = location_tokens[location_tokens.len().saturating_sub(2)..].join(" ");

    let added_on = normalize_date(info[info.len() - 1])?;

    // Blank lines are gone by now, so every remaining line is a paragraph;
    // rejoining with a blank line keeps the renderer's paragraph split intact.
    let quote = entry.lines[2..].join("\n\n").replace('\u{a0}', " ");

    Ok(Quote {
        title: title.to_string(),
        authors,
        location,
        added_on,
        quote,
    })
}

fn normalize_date(segment: &str) -> Result<String> {
    let raw = segment.replace(ADDED_ON_PREFIX, "");
    let (_weekday, datetime) = raw
        .split_once(", ")
        .ok_or_else(|| QuotesError::Entry(format!("bad timestamp: {raw}")))?;
    let parsed = NaiveDateTime::parse_from_str(datetime.trim(), DEVICE_DATE_FORMAT)
        .map_err(|e| QuotesError::Entry(format!("bad timestamp {raw:?}: {e}")))?;
    Ok(parsed.format(STORE_DATE_FORMAT).to_string())
}
