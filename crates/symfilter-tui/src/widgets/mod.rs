//! Ratatui widgets for the symfilter TUI.

pub mod command_bar;
pub mod help;
pub mod query_bar;
pub mod symbol_table;
