use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use kindle_quotes::commands::{self, CmdMessage, MessageLevel, QuotePaths};
use kindle_quotes::error::{QuotesError, Result};
use kindle_quotes::query::QuoteQuery;
use kindle_quotes::render;
use kindle_quotes::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, OutputFormat};

const MY_CLIPPINGS: &str = "My Clippings.txt";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = init_store(&cli)?;

    match cli.command {
        Commands::Export { my_clippings } => handle_export(&mut store, my_clippings),
        Commands::Show { format } => handle_show(&mut store, format),
        Commands::Find {
            author,
            book,
            quote,
            format,
        } => handle_find(&store, &author, &book, &quote, format),
    }
}

fn init_store(cli: &Cli) -> Result<FileStore> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "kindle-quotes", "kindle-quotes")
            .ok_or_else(|| QuotesError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    let paths = QuotePaths::in_dir(&data_dir);
    Ok(FileStore::new(paths.quotes, paths.history))
}

/// Where the device mounts its clippings file, per platform. Falls back to
/// the current directory when the platform has no known mount point.
fn default_clippings_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from(format!("/Volumes/Kindle/documents/{MY_CLIPPINGS}"))
    } else if cfg!(target_os = "linux") {
        let user = std::env::var("USER").unwrap_or_default();
        PathBuf::from(format!("/run/media/{user}/Kindle/documents/{MY_CLIPPINGS}"))
    } else {
        PathBuf::from(MY_CLIPPINGS)
    }
}

fn handle_export(store: &mut FileStore, my_clippings: Option<PathBuf>) -> Result<()> {
    let clippings_path = my_clippings.unwrap_or_else(default_clippings_path);
    let result = commands::export::run(store, &clippings_path)?;
    print_messages(&result.messages);
    println!("Quote store: {}", store.quotes_path().display());
    Ok(())
}

fn handle_show(store: &mut FileStore, format: OutputFormat) -> Result<()> {
    let result = commands::show::run(store, &mut rand::rng())?;
    print_messages(&result.messages);
    for quote in &result.quotes {
        match format {
            OutputFormat::Simple => println!("{}", render::simple(quote)),
            OutputFormat::Raw => println!("{}", to_raw(quote)?),
        }
    }
    Ok(())
}

fn handle_find(
    store: &FileStore,
    author: &str,
    book: &str,
    quote: &str,
    format: OutputFormat,
) -> Result<()> {
    let query = QuoteQuery::new(author, book, quote);
    let result = commands::find::run(store, &query)?;
    print_messages(&result.messages);
    match format {
        OutputFormat::Simple => {
            for quote in &result.quotes {
                println!("---");
                println!("{}\n", render::simple(quote));
            }
        }
        OutputFormat::Raw => {
            if !result.quotes.is_empty() {
                println!("{}", to_raw(&result.quotes)?);
            }
        }
    }
    Ok(())
}

fn to_raw<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| QuotesError::Store(e.to_string()))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
