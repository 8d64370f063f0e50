use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "kq")]
#[command(about = "Export, search, and replay Kindle highlights", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the quote store and draw history
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a My Clippings export and (re)write the quote store
    #[command(alias = "e")]
    Export {
        /// Path to the My Clippings file (auto-detected when omitted)
        #[arg(long, value_name = "FILE")]
        my_clippings: Option<PathBuf>,
    },

    /// Print one random quote, never repeating within a cycle
    #[command(alias = "s")]
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Simple)]
        format: OutputFormat,
    },

    /// Search quotes by author, book title, or quote text
    #[command(alias = "f")]
    Find {
        /// Author name substring
        #[arg(long, default_value = "")]
        author: String,

        /// Book title substring
        #[arg(long, default_value = "")]
        book: String,

        /// Quote text substring
        #[arg(long, default_value = "")]
        quote: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Simple)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Wrapped prose with an attribution line
    Simple,
    /// The JSON record(s)
    Raw,
}
