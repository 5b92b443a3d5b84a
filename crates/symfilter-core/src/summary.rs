//! Stock summaries — the rows of the symbol table.
//!
//! Each [`StockSummary`] becomes one [`Row`] whose first cell is the ticker
//! symbol, so the row filter matches on symbols only.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Row, Table};

/// Column titles of the summary table header.
pub const SUMMARY_HEADER: [&str; 6] =
    ["Symbol", "Start Date", "End Date", "Records", "Last Close", "PE"];

/// Per-symbol summary of the downloaded price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub num_records: u64,
    pub last_close: f64,
    /// Fractional change of the last close against the previous one (0.01 = +1%).
    pub last_change: f64,
    /// Last price/earnings ratio, when the source had one.
    #[serde(default)]
    pub last_pe: Option<f64>,
}

impl StockSummary {
    /// Render this summary as a table row labelled `#rank`. `date_format`
    /// must have passed [`check_date_format`].
    pub fn to_row(&self, rank: usize, date_format: &str) -> Row {
        let pe = match self.last_pe {
            Some(pe) => format!("{pe:.2}"),
            None => "Not available".to_string(),
        };
        Row::new([
            self.symbol.clone(),
            self.start_date.format(date_format).to_string(),
            self.end_date.format(date_format).to_string(),
            self.num_records.to_string(),
            format!("{:.2} ({})", self.last_close, format_change(self.last_change)),
            pe,
        ])
        .with_label(format!("#{rank}"))
    }

    /// True when the last close moved up or stayed flat.
    pub fn is_gain(&self) -> bool {
        self.last_change >= 0.0
    }
}

/// Format a fractional change as a signed percentage: `0.0123` → `+1.23%`.
pub fn format_change(change: f64) -> String {
    format!("{:+.2}%", change * 100.0)
}

/// Reject strftime patterns chrono cannot render (`%Q`, a trailing `%`).
///
/// Formatting a date with such a pattern fails at display time, so callers
/// check user-supplied formats once before building any rows.
pub fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::DateFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

/// Build the summary table, ranking rows from 1 in input order.
///
/// `date_format` must have passed [`check_date_format`].
pub fn table_from_summaries(summaries: &[StockSummary], date_format: &str) -> Table {
    Table::new(
        Row::new(SUMMARY_HEADER),
        summaries
            .iter()
            .enumerate()
            .map(|(i, s)| s.to_row(i + 1, date_format)),
    )
}

// ---------------------------------------------------------------------------
// Sample data — used when no table source is given
// ---------------------------------------------------------------------------

/// A fixed set of summaries for demo runs and tests.
pub fn sample_summaries() -> Vec<StockSummary> {
    // (symbol, records, last close, change, pe)
    type Template = (&'static str, u64, f64, f64, Option<f64>);
    const SAMPLE: &[Template] = &[
        ("AAPL", 2516, 189.84, 0.0123, Some(29.41)),
        ("AMZN", 2516, 178.22, -0.0087, Some(61.02)),
        ("GOOG", 2516, 141.80, 0.0211, Some(26.73)),
        ("GOOGL", 2516, 140.93, 0.0208, Some(26.55)),
        ("META", 2516, 474.99, -0.0154, Some(33.12)),
        ("MSFT", 2516, 415.50, 0.0042, Some(36.88)),
        ("NFLX", 2516, 610.56, 0.0310, Some(49.70)),
        ("NVDA", 2516, 875.28, 0.0467, Some(73.15)),
        ("ORCL", 2516, 125.64, -0.0021, Some(33.90)),
        ("TSLA", 2516, 175.34, -0.0398, Some(40.27)),
        ("V", 2516, 279.12, 0.0005, Some(31.44)),
        ("BRK-B", 2516, 408.07, 0.0018, None),
    ];

    let start = NaiveDate::from_ymd_opt(2014, 3, 27).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 3, 26).unwrap_or_default();

    SAMPLE
        .iter()
        .map(|&(symbol, num_records, last_close, last_change, last_pe)| StockSummary {
            symbol: symbol.to_string(),
            start_date: start,
            end_date: end,
            num_records,
            last_close,
            last_change,
            last_pe,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;
    use pretty_assertions::assert_eq;

    fn summary() -> StockSummary {
        StockSummary {
            symbol: "AAPL".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            num_records: 253,
            last_close: 132.69,
            last_change: -0.0077,
            last_pe: Some(40.123),
        }
    }

    #[test]
    fn row_cells_follow_header_order() {
        let row = summary().to_row(3, "%B %d, %Y");
        let texts: Vec<&str> = row.cells.iter().map(Cell::text).collect();
        assert_eq!(
            texts,
            vec![
                "AAPL",
                "January 02, 2020",
                "December 31, 2020",
                "253",
                "132.69 (-0.77%)",
                "40.12",
            ]
        );
        assert_eq!(row.label.as_deref(), Some("#3"));
        assert_eq!(row.cells.len(), SUMMARY_HEADER.len());
    }

    #[test]
    fn missing_pe_is_not_available() {
        let mut s = summary();
        s.last_pe = None;
        let row = s.to_row(1, "%Y-%m-%d");
        assert_eq!(row.cells[5].text(), "Not available");
    }

    #[test]
    fn change_is_signed() {
        assert_eq!(format_change(0.0123), "+1.23%");
        assert_eq!(format_change(-0.05), "-5.00%");
        assert_eq!(format_change(0.0), "+0.00%");
    }

    #[test]
    fn table_ranks_from_one() {
        let table = table_from_summaries(&sample_summaries(), "%Y-%m-%d");
        assert_eq!(table.header().cells.len(), SUMMARY_HEADER.len());
        assert_eq!(table.data_rows()[0].label.as_deref(), Some("#1"));
        assert_eq!(table.len(), sample_summaries().len() + 1);
    }

    #[test]
    fn date_formats_are_checked() {
        assert!(check_date_format("%B %d, %Y").is_ok());
        assert!(check_date_format("%Y-%m-%d").is_ok());
        assert!(check_date_format("plain text").is_ok());
        assert!(matches!(
            check_date_format("%Q"),
            Err(Error::DateFormat { format }) if format == "%Q"
        ));
        assert!(check_date_format("%Y-%").is_err());
    }

    #[test]
    fn deserializes_without_pe() {
        let json = r#"{
            "symbol": "GOOG",
            "start_date": "2020-01-02",
            "end_date": "2020-12-31",
            "num_records": 253,
            "last_close": 1751.88,
            "last_change": 0.0101
        }"#;
        let s: StockSummary = serde_json::from_str(json).unwrap();
        assert_eq!(s.symbol, "GOOG");
        assert!(s.last_pe.is_none());
        assert!(s.is_gain());
    }
}
