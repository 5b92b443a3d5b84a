//! Row filter — case-insensitive substring match against each row's first cell.
//!
//! The filter is split in two: [`decide`] is a pure function from a query and
//! a row slice to a list of [`RowDecision`]s, and [`apply`] writes those
//! decisions back onto the rows. The header (row 0) is never evaluated, and a
//! row without a first cell produces no decision, so it keeps whatever
//! visibility it had before.

use std::ops::Range;

use crate::types::{Row, Table, Visibility};

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Search text normalised to uppercase once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    raw: String,
    upper: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let upper = raw.to_uppercase();
        Self { raw, upper }
    }

    /// The text as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The uppercased text used for matching.
    pub fn normalized(&self) -> &str {
        &self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// True when `text`, uppercased, contains the query. The empty query
    /// matches everything.
    pub fn matches(&self, text: &str) -> bool {
        text.to_uppercase().contains(self.upper.as_str())
    }

    /// Byte range within `text` of the first match, for highlighting.
    ///
    /// Uppercasing can change byte lengths (`ß` → `SS`), so offsets in the
    /// uppercased text are mapped back to the source characters that
    /// produced them; the range always covers whole characters. Returns `None` for the empty query or no match.
    pub fn highlight(&self, text: &str) -> Option<Range<usize>> {
        if self.upper.is_empty() {
            return None;
        }

        let mut upper = String::with_capacity(text.len());
        // origin[i] = byte offset in `text` of the char that produced upper byte i
        let mut origin = Vec::with_capacity(text.len());
        for (offset, ch) in text.char_indices() {
            for up in ch.to_uppercase() {
                upper.push(up);
                origin.extend(std::iter::repeat(offset).take(up.len_utf8()));
            }
        }

        let pos = upper.find(self.upper.as_str())?;
        let start = origin[pos];
        // the match may end partway through an expansion; cover the whole char
        let last = origin[pos + self.upper.len() - 1];
        let end = last + text[last..].chars().next().map_or(0, char::len_utf8);
        Some(start..end)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// Visibility chosen for one row by [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowDecision {
    /// Index into the full row slice (header = 0).
    pub index: usize,
    pub visibility: Visibility,
}

/// Counts from one filter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSummary {
    /// Rows that had a first cell and were evaluated.
    pub evaluated: usize,
    /// Evaluated rows that ended up shown.
    pub shown: usize,
}

/// Decide the visibility of every data row in `rows`.
///
/// Row 0 is the header and is skipped; rows without a first cell are skipped
/// too. Decisions are returned in row order.
pub fn decide(query: &Query, rows: &[Row]) -> Vec<RowDecision> {
    rows.iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| {
            let cell = row.first_cell()?;
            let visibility = if query.matches(cell.text()) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
            Some(RowDecision { index, visibility })
        })
        .collect()
}

/// Write `decisions` onto `rows`. Indices outside the slice are ignored.
pub fn apply(rows: &mut [Row], decisions: &[RowDecision]) {
    for decision in decisions {
        if let Some(row) = rows.get_mut(decision.index) {
            row.set_visibility(decision.visibility);
        }
    }
}

impl Table {
    /// Run the row filter against this table in place.
    pub fn filter(&mut self, query: &Query) -> FilterSummary {
        let decisions = decide(query, self.rows());
        apply(self.rows_mut(), &decisions);

        let summary = FilterSummary {
            evaluated: decisions.len(),
            shown: decisions.iter().filter(|d| d.visibility.is_shown()).count(),
        };
        tracing::debug!(
            query = %query.raw(),
            evaluated = summary.evaluated,
            shown = summary.shown,
            "row filter applied"
        );
        summary
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
