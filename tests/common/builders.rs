//! Test builders — ergonomic constructors for tables and summaries.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::NaiveDate;
use symfilter_core::{Cell, Row, StockSummary, Table, Visibility};

// ---------------------------------------------------------------------------
// TableBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Table`] fixtures.
///
/// ```rust
/// let table = TableBuilder::symbols(&["AAPL", "GOOG"])
///     .empty_row()
///     .hidden_row(&["MSFT"])
///     .build();
/// ```
pub struct TableBuilder {
    header: Row,
    rows: Vec<Row>,
}

impl TableBuilder {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: Row::new(header.iter().copied()),
            rows: Vec::new(),
        }
    }

    /// A one-column `Symbol` table with one row per symbol.
    pub fn symbols(symbols: &[&str]) -> Self {
        symbols
            .iter()
            .fold(Self::new(&["Symbol"]), |b, &s| b.row(&[s]))
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(Row::new(cells.iter().copied()));
        self
    }

    /// A row that starts out hidden.
    pub fn hidden_row(mut self, cells: &[&str]) -> Self {
        let mut row = Row::new(cells.iter().copied());
        row.set_visibility(Visibility::Hidden);
        self.rows.push(row);
        self
    }

    /// A row with no cells at all.
    pub fn empty_row(mut self) -> Self {
        self.rows.push(Row::new(Vec::<Cell>::new()));
        self
    }

    pub fn build(self) -> Table {
        Table::new(self.header, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// A summary with fixed dates; only the interesting fields vary.
pub fn summary(symbol: &str, last_close: f64, last_change: f64, last_pe: Option<f64>) -> StockSummary {
    StockSummary {
        symbol: symbol.to_string(),
        start_date: NaiveDate::from_ymd_opt(2019, 1, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
        num_records: 1257,
        last_close,
        last_change,
        last_pe,
    }
}

// ---------------------------------------------------------------------------
// Inspection helpers
// ---------------------------------------------------------------------------

/// First-cell text of every shown data row, in table order.
pub fn shown_symbols(table: &Table) -> Vec<String> {
    table
        .visible_rows()
        .into_iter()
        .filter_map(|i| table.rows()[i].first_cell())
        .map(|c| c.text().to_string())
        .collect()
}

/// Visibility of every row, header included.
pub fn visibilities(table: &Table) -> Vec<Visibility> {
    table.rows().iter().map(Row::visibility).collect()
}
