//! Table sources — load a [`Table`] from a file on disk.
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.json` | Array of [`StockSummary`] objects |
//! | `.tsv`, `.txt` | Tab-separated lines; the first non-blank line is the header |

use std::path::Path;

use crate::error::{Error, Result};
use crate::summary::{check_date_format, table_from_summaries, StockSummary};
use crate::types::{Row, Table};

/// Load a table from `path`, choosing the format by extension.
pub fn load_table(path: &Path, date_format: &str) -> Result<Table> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt") => {
            Format::Tsv
        }
        _ => {
            return Err(Error::UnsupportedSource {
                path: path.to_path_buf(),
            })
        }
    };

    let src = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = match format {
        Format::Json => {
            let summaries: Vec<StockSummary> =
                serde_json::from_str(&src).map_err(|source| Error::Json {
                    path: path.to_path_buf(),
                    source,
                })?;
            check_date_format(date_format)?;
            table_from_summaries(&summaries, date_format)
        }
        Format::Tsv => parse_tsv(&src).ok_or_else(|| Error::EmptySource {
            path: path.to_path_buf(),
        })?,
    };

    tracing::info!(path = %path.display(), rows = table.len() - 1, "table loaded");
    Ok(table)
}

enum Format {
    Json,
    Tsv,
}

/// Parse tab-separated text. Returns `None` when there is no header line.
pub fn parse_tsv(src: &str) -> Option<Table> {
    let mut lines = src
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let header = Row::new(lines.next()?.split('\t').map(str::trim));
    let rows = lines.map(|line| Row::new(line.split('\t').map(str::trim)));
    Some(Table::new(header, rows))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
