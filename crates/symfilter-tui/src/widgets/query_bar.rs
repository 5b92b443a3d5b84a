//! Query bar widget — the symbol search input at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! [`QueryBarState::handle`] reports whether the text changed so the app
//! shell can re-run the row filter on every keystroke.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use symfilter_core::Query;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The search text typed by the user.
    pub text: String,
    /// Byte offset of the cursor within `text`.
    pub cursor: usize,
}

impl QueryBarState {
    /// Handle a key event from the app shell. Returns true when `text`
    /// changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.text, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let prev = self.text[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.text.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.text, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.text[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.text.len() {
                    self.cursor = self.text[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.text.len());
                }
                false
            }
            _ => false,
        }
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.set(String::new());
    }

    pub fn query(&self) -> Query {
        Query::new(self.text.as_str())
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    /// `(shown, total)` data rows, displayed at the right edge.
    counts: (usize, usize),
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        state: &'a QueryBarState,
        focused: bool,
        counts: (usize, usize),
        theme: &'a Theme,
    ) -> Self {
        Self { state, focused, counts, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.text[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Search symbols").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(16)])
            .split(inner);

        let query_line = if self.state.text.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.text.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let (shown, total) = self.counts;
        Paragraph::new(Line::from(format!("{shown}/{total} shown")).right_aligned())
            .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> QueryBarState {
        let mut state = QueryBarState::default();
        for c in s.chars() {
            assert!(state.handle(&AppEvent::Char(c)));
        }
        state
    }

    #[test]
    fn typing_appends_and_reports_change() {
        let state = typed("goo");
        assert_eq!(state.text, "goo");
        assert_eq!(state.cursor, 3);
        assert_eq!(state.query().normalized(), "GOO");
    }

    #[test]
    fn backspace_at_start_is_not_a_change() {
        let mut state = QueryBarState::default();
        assert!(!state.handle(&AppEvent::Backspace));
    }

    #[test]
    fn cursor_moves_by_char_boundaries() {
        let mut state = typed("aé");
        state.handle(&AppEvent::Nav(Direction::Left));
        assert_eq!(state.cursor, 1);
        assert!(state.handle(&AppEvent::Char('x')));
        assert_eq!(state.text, "axé");
        state.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(state.cursor, state.text.len());
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let mut state = typed("é");
        assert!(state.handle(&AppEvent::Backspace));
        assert!(state.text.is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn set_moves_cursor_to_end() {
        let mut state = QueryBarState::default();
        state.set("msft");
        assert_eq!(state.cursor, 4);
        state.clear();
        assert_eq!(state.cursor, 0);
        assert!(state.text.is_empty());
    }
}
