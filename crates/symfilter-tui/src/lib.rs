//! symfilter TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use symfilter_core::{config::Config, Table};

/// Start the TUI on `table`, optionally pre-filtered by `query`.
pub fn run(table: Table, config: Config, query: Option<&str>) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    let app = App::new(table, config, theme);
    let app = match query {
        Some(q) => app.with_query(q),
        None => app,
    };
    app.run()
}
