//! symfilter-core — table model and row filter for symfilter.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Table ──► Row Filter ──► UI / headless output
//! ```
//!
//! The row filter is a pure function from a [`Query`] and the table's rows to
//! a list of per-row visibility decisions; the caller applies them. Nothing
//! here touches the terminal.

pub mod config;
pub mod error;
pub mod filter;
pub mod source;
pub mod summary;
pub mod types;

pub use error::{Error, Result};
pub use filter::{FilterSummary, Query, RowDecision};
pub use summary::StockSummary;
pub use types::{Cell, Row, Table, Visibility};
