//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every edit of the query
//! text re-runs the row filter before the next frame is drawn.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        symbol_table::{SymbolTable, SymbolTableState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    Frame, Terminal,
};
use std::{io, time::Duration};
use symfilter_core::{config::Config, Table};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub table: SymbolTableState,
    pub query: QueryBarState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Re-run the row filter with the current query text.
    pub fn refilter(&mut self) {
        let query = self.query.query();
        self.table.refilter(query);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(table: Table, config: Config, theme: Theme) -> Self {
        let mut table = SymbolTableState::new(table);
        table.show_rank = config.ui.show_rank;
        table.highlight_matches = config.ui.highlight_matches;

        let state = AppState {
            table,
            query: QueryBarState::default(),
            focus: Focus::QueryBar,
            prev_focus: Focus::QueryBar,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state }
    }

    /// Pre-fill the query bar and apply it.
    pub fn with_query(mut self, text: &str) -> Self {
        self.state.query.set(text);
        self.state.refilter();
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if s.focus == Focus::Command {
            handle_command_mode(s, event);
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Char('?') if s.focus == Focus::Table => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if s.focus == Focus::Table => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Escape | AppEvent::Enter if s.focus == Focus::QueryBar => {
                tracing::debug!("focus: QueryBar -> Table");
                s.focus = Focus::Table;
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Table => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::Table,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            // Up/down keep moving the table cursor while typing a query
            AppEvent::Nav(Direction::Up | Direction::Down)
            | AppEvent::PageUp
            | AppEvent::PageDown => s.table.handle(&event),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

fn handle_command_mode(s: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Escape => {
            tracing::debug!("command bar cancelled");
            s.command_bar.clear();
            s.focus = s.prev_focus;
        }
        AppEvent::Enter => match Command::parse(&s.command_bar.input) {
            Ok(cmd) => {
                tracing::debug!(command = ?cmd, "executing command");
                s.command_bar.clear();
                s.focus = s.prev_focus;
                execute_command(s, cmd);
            }
            Err(msg) if msg.is_empty() => {
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            Err(msg) => {
                // Show the error; bar stays open
                s.command_bar.error = Some(msg);
            }
        },
        AppEvent::Quit => s.quit = true,
        other => s.command_bar.handle(&other),
    }
}

/// True when the focused widget takes text input, so letter keys must
/// produce characters rather than shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Table => s.table.handle(&event),
        Focus::QueryBar => {
            if s.query.handle(&event) {
                s.refilter();
            }
        }
        Focus::Command => {} // handled before dispatch
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: table | 3-line query bar | 1-line hints
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        SymbolTable::new(&state.table, state.focus == Focus::Table, &state.theme),
        vert[0],
    );
    frame.render_widget(
        QueryBar::new(
            &state.query,
            state.focus == Focus::QueryBar,
            state.table.counts(),
            &state.theme,
        ),
        vert[1],
    );
    frame.buffer_mut().set_string(
        vert[2].x,
        vert[2].y,
        " /:search  Tab:focus  ::command  ?:help  q:quit ",
        Style::default().add_modifier(Modifier::DIM),
    );

    if state.show_help {
        frame.render_widget(HelpPopup, area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, true, state.table.counts(), &state.theme);
        frame.set_cursor_position(qb.cursor_position(vert[1]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
