//! `:` commands — parsing and execution against the application state.

use crate::{app::AppState, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Toggle the help popup.
    Help,
    /// Switch theme by name.
    Theme(String),
    /// Toggle the rank column.
    Rank,
    /// Toggle match highlighting in the symbol column.
    Highlight,
    /// Empty the query and show every row again.
    Clear,
    /// Replace the query and refilter.
    Filter(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "rank" => Ok(Command::Rank),
            "hl" | "highlight" => Ok(Command::Highlight),
            "clear" => Ok(Command::Clear),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "f" | "filter" => Ok(Command::Filter(rest.to_string())),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Rank => s.table.show_rank = !s.table.show_rank,
        Command::Highlight => s.table.highlight_matches = !s.table.highlight_matches,
        Command::Clear => {
            s.query.clear();
            s.refilter();
        }
        Command::Filter(text) => {
            s.query.set(text);
            s.refilter();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
