use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotesError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid quote store: {}", .0.display())]
    MalformedStore(PathBuf),

    #[error("No query parameters provided (need at least one of author, book, quote)")]
    InvalidQuery,

    #[error("Malformed clippings entry: {0}")]
    Entry(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QuotesError>;
