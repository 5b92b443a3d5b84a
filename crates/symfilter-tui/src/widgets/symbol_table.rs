//! Symbol table widget — the filtered stock table filling the main pane.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | Jump to first / last shown row |
//!
//! # Cursor semantics
//!
//! `cursor` and `offset` index the list of *shown* data rows, not the full
//! table. Every filter run can shrink that list, so both are clamped after
//! [`SymbolTableState::refilter`].

use std::cell::Cell as StdCell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Cell as TuiCell, Paragraph, Row as TuiRow, Table as TuiTable, Widget},
};
use symfilter_core::{FilterSummary, Query, Row, Table};

const PAGE_STEP: usize = 10;
const MAX_COLUMN_WIDTH: usize = 32;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct SymbolTableState {
    pub table: Table,
    /// Query from the last filter run, kept for match highlighting.
    pub query: Query,
    /// Position of the highlighted row within the shown rows.
    pub cursor: usize,
    /// First shown row drawn at the top of the pane.
    pub offset: usize,
    pub show_rank: bool,
    pub highlight_matches: bool,
    /// Indices into `table.rows()` of shown data rows, refreshed by `refilter`.
    visible: Vec<usize>,
    /// Cached from the last render so `handle()` can page by screen height.
    last_height: StdCell<usize>,
}

impl SymbolTableState {
    pub fn new(table: Table) -> Self {
        let visible = table.visible_rows();
        Self {
            table,
            query: Query::default(),
            cursor: 0,
            offset: 0,
            show_rank: true,
            highlight_matches: true,
            visible,
            last_height: StdCell::new(20),
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Run the row filter with `query` and clamp the cursor to the new
    /// shown set.
    pub fn refilter(&mut self, query: Query) -> FilterSummary {
        let summary = self.table.filter(&query);
        self.query = query;
        self.visible = self.table.visible_rows();
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
        self.scroll_to_cursor();
        summary
    }

    /// `(shown, total)` data-row counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.visible.len(), self.table.data_rows().len())
    }

    /// The row under the cursor, if any row is shown.
    pub fn selected(&self) -> Option<&Row> {
        self.visible
            .get(self.cursor)
            .map(|&i| &self.table.rows()[i])
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
        let max_offset = self.visible.len().saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let last = match self.visible.len() {
            0 => return,
            n => n - 1,
        };

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::PageUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP.min(self.height()));
            }
            AppEvent::PageDown => {
                self.cursor = (self.cursor + PAGE_STEP.min(self.height())).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = last,
            _ => return,
        }
        self.scroll_to_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "table: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SymbolTable<'a> {
    state: &'a SymbolTableState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SymbolTable<'a> {
    pub fn new(state: &'a SymbolTableState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for SymbolTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let (shown, total) = state.counts();
        let block = Block::bordered()
            .title(format!("Symbols ({shown}/{total})"))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        // One line goes to the header row.
        let height = (inner.height as usize).saturating_sub(1);
        state.last_height.set(height);

        if state.visible.is_empty() {
            let msg = if state.query.is_empty() {
                "table is empty".to_string()
            } else {
                format!("no symbols match \"{}\"", state.query.raw())
            };
            Paragraph::new(Line::from(msg).centered()).render(inner, buf);
            return;
        }

        let start = state.offset.min(state.visible.len());
        let end = (start + height).min(state.visible.len());
        let window = &state.visible[start..end];

        let mut header: Vec<TuiCell> = Vec::new();
        if state.show_rank {
            header.push(TuiCell::from(""));
        }
        header.extend(state.table.header().cells.iter().map(|c| TuiCell::from(c.text())));

        let rows: Vec<TuiRow> = window
            .iter()
            .enumerate()
            .map(|(pos, &index)| {
                let row = &state.table.rows()[index];
                let mut tui_row = TuiRow::new(self.render_cells(row));
                if self.focused && start + pos == state.cursor {
                    tui_row = tui_row.style(self.theme.cursor);
                }
                tui_row
            })
            .collect();

        let widths = column_widths(state, window);
        TuiTable::new(rows, widths)
            .header(TuiRow::new(header).style(self.theme.header))
            .column_spacing(2)
            .render(inner, buf);
    }
}

impl SymbolTable<'_> {
    fn render_cells(&self, row: &Row) -> Vec<TuiCell<'static>> {
        let state = self.state;
        let mut cells: Vec<TuiCell<'static>> = Vec::with_capacity(row.cells.len() + 1);

        if state.show_rank {
            let label = row.label.clone().unwrap_or_default();
            cells.push(TuiCell::from(Span::styled(label, self.theme.rank)));
        }

        for (col, cell) in row.cells.iter().enumerate() {
            let text = cell.text();
            let line = match col {
                0 => self.symbol_line(text),
                _ => Line::from(Span::styled(text.to_string(), self.theme.change_style(text))),
            };
            cells.push(TuiCell::from(line));
        }
        cells
    }

    /// The symbol cell, with the matched range highlighted.
    fn symbol_line(&self, text: &str) -> Line<'static> {
        let base = self.theme.symbol_style(text);
        let range = if self.state.highlight_matches {
            self.state.query.highlight(text)
        } else {
            None
        };

        match range {
            Some(r) => Line::from(vec![
                Span::styled(text[..r.start].to_string(), base),
                Span::styled(text[r.clone()].to_string(), base.patch(self.theme.search_highlight)),
                Span::styled(text[r.end..].to_string(), base),
            ]),
            None => Line::from(Span::styled(text.to_string(), base)),
        }
    }
}

/// Size each column to its widest header or on-screen cell.
fn column_widths(state: &SymbolTableState, window: &[usize]) -> Vec<Constraint> {
    let header = state.table.header();
    let columns = window
        .iter()
        .map(|&i| state.table.rows()[i].cells.len())
        .chain(std::iter::once(header.cells.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    let rows = window.iter().map(|&i| &state.table.rows()[i]).chain(std::iter::once(header));
    for row in rows {
        for (col, cell) in row.cells.iter().enumerate() {
            widths[col] = widths[col].max(cell.text().chars().count());
        }
    }

    let mut constraints = Vec::with_capacity(columns + 1);
    if state.show_rank {
        let rank = window
            .iter()
            .filter_map(|&i| state.table.rows()[i].label.as_ref())
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        constraints.push(Constraint::Length(rank as u16));
    }
    constraints.extend(
        widths
            .into_iter()
            .map(|w| Constraint::Length(w.min(MAX_COLUMN_WIDTH) as u16)),
    );
    constraints
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
