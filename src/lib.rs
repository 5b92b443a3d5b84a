//! symfilter — terminal viewer for stock symbol tables.
//!
//! The binary loads a table (from `--table`, the config file, or the built-in
//! sample), then either opens the TUI or, with `--headless`, applies a single
//! query and prints the shown rows.
//!
//! ```text
//! Source ──► Table ──► Row Filter ──► TUI
//!                           │
//!                           └──► headless (stdout)
//! ```

use std::io::Write;
use std::path::Path;

use symfilter_core::{config::Config, source, summary, Query, Row, Table};

/// Load the table from `path`, falling back to the configured source and
/// then to the built-in sample summaries.
pub fn resolve_table(path: Option<&Path>, config: &Config) -> anyhow::Result<Table> {
    let date_format = config.ui.date_format.as_str();
    summary::check_date_format(date_format)?;
    match path.or(config.table.source.as_deref()) {
        Some(path) => Ok(source::load_table(path, date_format)?),
        None => {
            tracing::info!("no table source given, using sample summaries");
            Ok(summary::table_from_summaries(
                &summary::sample_summaries(),
                date_format,
            ))
        }
    }
}

/// Apply `query` to `table` and write the header plus every shown data row
/// as tab-separated lines.
pub fn write_filtered<W: Write>(table: &mut Table, query: &Query, out: &mut W) -> anyhow::Result<()> {
    table.filter(query);

    write_row(out, table.header())?;
    for index in table.visible_rows() {
        write_row(out, &table.rows()[index])?;
    }
    out.flush()?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, row: &Row) -> std::io::Result<()> {
    let cells: Vec<&str> = row.cells.iter().map(|c| c.text()).collect();
    writeln!(out, "{}", cells.join("\t"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
