#![allow(unused)]
//! Table source integration harness.
//!
//! # What this covers
//!
//! - JSON stock summaries load into a ranked table whose first cell is the
//!   symbol, and the row filter works on the loaded table.
//! - TSV sources: header taken from the first line, blank lines skipped.
//! - Error paths: unsupported extension, malformed JSON, empty TSV.
//!
//! # Running
//!
//! ```sh
//! cargo test --test source_harness
//! ```

mod common;
use common::*;

use std::io::Write;

use symfilter_core::{source::load_table, summary::SUMMARY_HEADER, Error, Query};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn json_summaries_become_ranked_rows() {
    let summaries = vec![
        summary("AAPL", 189.84, 0.0123, Some(29.41)),
        summary("GOOG", 141.8, -0.0211, None),
    ];
    let file = write_temp(".json", &serde_json::to_string(&summaries).unwrap());

    let table = load_table(file.path(), DATE_FORMAT).unwrap();
    let header: Vec<&str> = table.header().cells.iter().map(|c| c.text()).collect();
    assert_eq!(header, SUMMARY_HEADER.to_vec());

    let goog = &table.rows()[2];
    assert_eq!(goog.label.as_deref(), Some("#2"));
    let cells: Vec<&str> = goog.cells.iter().map(|c| c.text()).collect();
    pretty_assertions::assert_eq!(
        cells,
        vec!["GOOG", "2019-01-02", "2023-12-29", "1257", "141.80 (-2.11%)", "Not available"]
    );
}

#[test]
fn loaded_json_table_filters_on_symbol() {
    let summaries = vec![
        summary("AAPL", 1.0, 0.0, None),
        summary("GOOG", 1.0, 0.0, None),
        summary("GOOGL", 1.0, 0.0, None),
    ];
    let file = write_temp(".json", &serde_json::to_string(&summaries).unwrap());

    let mut table = load_table(file.path(), DATE_FORMAT).unwrap();
    table.filter(&Query::new("googl"));
    assert_shown!(table, ["GOOGL"]);
}

#[test]
fn tsv_source_loads() {
    let file = write_temp(".tsv", "Symbol\tName\r\nAAPL\tApple\r\n\r\nMSFT\tMicrosoft\r\n");
    let mut table = load_table(file.path(), DATE_FORMAT).unwrap();
    assert_eq!(table.len(), 3);
    table.filter(&Query::new("ms"));
    assert_shown!(table, ["MSFT"]);
}

#[test]
fn empty_tsv_is_an_error() {
    let file = write_temp(".txt", "\n\n");
    let err = load_table(file.path(), DATE_FORMAT).unwrap_err();
    assert!(matches!(err, Error::EmptySource { .. }), "got {err}");
}

#[test]
fn malformed_json_names_the_file() {
    let file = write_temp(".json", "[{\"symbol\": \"AAPL\"}]");
    let err = load_table(file.path(), DATE_FORMAT).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn unsupported_extension_is_rejected() {
    let file = write_temp(".xlsx", "");
    let err = load_table(file.path(), DATE_FORMAT).unwrap_err();
    assert!(matches!(err, Error::UnsupportedSource { .. }));
}
