use std::path::PathBuf;

use clap::Parser;
use symfilter_core::{config::Config, Query};

#[derive(Parser)]
#[command(name = "symfilter", about = "Browse and filter stock symbol tables")]
struct Cli {
    /// Table source (.json stock summaries, or .tsv/.txt tab-separated).
    #[arg(long, short)]
    table: Option<PathBuf>,

    /// Initial search text.
    #[arg(long, short)]
    query: Option<String>,

    /// Print the filtered table to stdout instead of opening the TUI.
    #[arg(long)]
    headless: bool,

    /// Config file to use instead of ~/.config/symfilter/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/symfilter-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/symfilter-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("symfilter debug log started — tail -f /tmp/symfilter-debug.log");
    }

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "config load failed, using defaults");
            Config::defaults()
        }),
    };

    let mut table = symfilter::resolve_table(cli.table.as_deref(), &config)?;

    if cli.headless {
        let query = Query::new(cli.query.unwrap_or_default());
        let stdout = std::io::stdout();
        return symfilter::write_filtered(&mut table, &query, &mut stdout.lock());
    }

    symfilter_tui::run(table, config, cli.query.as_deref())
}
