use super::{DataStore, DATE_FORMAT};
use crate::error::{QuotesError, Result};
use crate::model::{HistoryEntry, Quote};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File-backed store: quotes in a JSON file, the draw history in a sibling
/// newline-delimited ledger.
pub struct FileStore {
    quotes_path: PathBuf,
    history_path: PathBuf,
}

impl FileStore {
    pub fn new(quotes_path: PathBuf, history_path: PathBuf) -> Self {
        Self {
            quotes_path,
            history_path,
        }
    }

    pub fn quotes_path(&self) -> &Path {
        &self.quotes_path
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.history_path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    fn ensure_parent_dir(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(QuotesError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()> {
        Self::ensure_parent_dir(&self.quotes_path)?;
        let encoded = to_ascii_pretty(quotes)
            .map_err(|e| QuotesError::Store(format!("could not encode quotes: {e}")))?;
        fs::write(&self.quotes_path, encoded).map_err(QuotesError::Io)?;
        Ok(())
    }

    fn load_quotes(&self) -> Result<Vec<Quote>> {
        if !self.quotes_path.exists() {
            return Err(QuotesError::NotFound(self.quotes_path.clone()));
        }
        let content = fs::read_to_string(&self.quotes_path).map_err(QuotesError::Io)?;
        serde_json::from_str(&content)
            .map_err(|_| QuotesError::MalformedStore(self.quotes_path.clone()))
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>> {
        if !self.history_path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.history_path).map_err(QuotesError::Io)?;
        let mut history = Vec::new();
        for (num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            history.push(parse_ledger_line(line).ok_or_else(|| {
                QuotesError::Store(format!("bad history line {}: {line:?}", num + 1))
            })?);
        }
        Ok(history)
    }

    fn append_history(&mut self, index: usize) -> Result<()> {
        Self::ensure_parent_dir(&self.history_path)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_path)
            .map_err(QuotesError::Io)?;
        let stamp = Local::now().naive_local().format(DATE_FORMAT);
        writeln!(file, "{stamp}, {index}").map_err(QuotesError::Io)?;
        Ok(())
    }

    fn reset_history(&mut self) -> Result<()> {
        if !self.history_path.exists() {
            return Ok(());
        }
        // Backup first: the previous cycle stays recoverable for one
        // generation.
        fs::copy(&self.history_path, self.backup_path()).map_err(QuotesError::Io)?;
        fs::write(&self.history_path, "").map_err(QuotesError::Io)?;
        Ok(())
    }
}

fn parse_ledger_line(line: &str) -> Option<HistoryEntry> {
    let (stamp, index) = line.split_once(", ")?;
    let added_at = NaiveDateTime::parse_from_str(stamp, DATE_FORMAT).ok()?;
    let index: usize = index.trim().parse().ok()?;
    Some(HistoryEntry::new(added_at, index))
}

/// Pretty-print with every non-ASCII character escaped as `\uXXXX`, matching
/// the original export encoding so store files stay diffable in any editor.
fn to_ascii_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut out, AsciiPretty::new());
    value.serialize(&mut ser)?;
    Ok(out)
}

struct AsciiPretty<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiPretty<'_> {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::new(),
        }
    }
}

impl Formatter for AsciiPretty<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            if start < idx {
                writer.write_all(fragment[start..idx].as_bytes())?;
            }
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}
