//! # kindle-quotes Architecture
//!
//! kindle-quotes is a **UI-agnostic highlight library**: it parses a Kindle
//! "My Clippings.txt" export into structured quote records, persists them as
//! JSON, and serves them back through non-repeating random draws or substring
//! search. The CLI is a thin client over that library.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic for export / show / find                  │
//! │  - Returns structured Result<CmdResult>, never prints       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait: quote store + history ledger   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `commands/` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, **never** writes to stdout/stderr and **never** calls
//! `std::process::exit`. Warnings and quiet-success outcomes (empty store,
//! no search matches, exhausted draw cycle) travel as leveled messages on
//! `CmdResult`; only the CLI decides how to render them and what to exit with.
//!
//! ## Module Overview
//!
//! - [`clippings`]: segmentation and field extraction for the export file
//! - [`commands`]: business logic for each command
//! - [`store`]: storage abstraction (quote store + history ledger)
//! - [`sampler`]: non-repeating random draw over the history ledger
//! - [`query`]: case-insensitive substring filtering
//! - [`render`]: line-wrapped presentation of a quote
//! - [`model`]: core data types (`Quote`, `HistoryEntry`)
//! - [`error`]: error types

pub mod clippings;
pub mod commands;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod sampler;
pub mod store;
