//! `bg-output` — simulation output writers for the rust_burgle model.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                                |
//! |----------|---------|----------------------------------------------|
//! | *(none)* | CSV     | `burglary_events.csv`, `tick_summaries.csv`  |
//! | `sqlite` | SQLite  | `output.db`                                  |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `bg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BurglaryEventRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
