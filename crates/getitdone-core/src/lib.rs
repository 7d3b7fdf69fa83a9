//! # GetItDone Core Library
//!
//! The scheduling brain of the GetItDone todo tracker: free-text date
//! expressions, schedule classification, and a JSON-backed todo store.
//!
//! ## Features
//!
//! - **Date Expressions**: Understands `tomorrow`, `fri`, `next tue`, `+3d`,
//!   `on 2026-11-03`, `asap`, `bg` and friends, both as a trailing part of a
//!   sentence and as a dedicated date answer
//! - **Schedule Sections**: Buckets todos into ASAP, overdue, today, tomorrow,
//!   per-date future groups, no date, background and completed
//! - **Deterministic**: Every entry point takes `today` explicitly; nothing
//!   in the parser or classifier reads the clock
//! - **Durable Storage**: Each mutation is written atomically to a JSON file
//!
//! ## Core Modules
//!
//! - [`models`]: Todo items and parse outcomes
//! - [`dates`]: Weekday table and date arithmetic shared by the parser
//! - [`parser`]: Date-expression and duration parsing
//! - [`schedule`]: Schedule classification, ordering and date context labels
//! - [`store`]: The todo repository and its JSON file implementation
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use getitdone_core::{
//!     models::NewTodoData,
//!     parser::extract_trailing_date,
//!     schedule::classify,
//!     store::{JsonStore, TodoRepository},
//! };
//!
//! fn main() -> Result<(), getitdone_core::error::CoreError> {
//!     let today = Local::now().date_naive();
//!     let mut store = JsonStore::open("todos.json")?;
//!
//!     let extraction = extract_trailing_date("buy milk tomorrow", today);
//!     let schedule = extraction.outcome.into_schedule().unwrap_or_default();
//!     store.add(NewTodoData::new(extraction.text, schedule))?;
//!
//!     for section in classify(store.items(), today) {
//!         println!("{}: {} todo(s)", section.kind.label(), section.items.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod dates;
pub mod error;
pub mod models;
pub mod parser;
pub mod schedule;
pub mod store;
