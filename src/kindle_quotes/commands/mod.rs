use crate::model::Quote;
use std::path::{Path, PathBuf};

pub mod export;
pub mod find;
pub mod show;

const QUOTES_FILENAME: &str = "quotes.json";
const HISTORY_FILENAME: &str = "quotes_history.txt";

/// The two files a store lives in. Built explicitly by the CLI; no module
/// carries an ambient global path.
#[derive(Debug, Clone)]
pub struct QuotePaths {
    pub quotes: PathBuf,
    pub history: PathBuf,
}

impl QuotePaths {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            quotes: data_dir.join(QUOTES_FILENAME),
            history: data_dir.join(HISTORY_FILENAME),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a command hands back to the CLI: quotes to display plus leveled
/// messages. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub quotes: Vec<Quote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.quotes = quotes;
        self
    }
}
