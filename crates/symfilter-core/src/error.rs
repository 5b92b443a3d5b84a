//! Error type for symfilter-core.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stock summaries in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported table source {} (expected .json, .tsv or .txt)", path.display())]
    UnsupportedSource { path: PathBuf },

    #[error("table source {} has no header row", path.display())]
    EmptySource { path: PathBuf },

    #[error("invalid date format {format:?}")]
    DateFormat { format: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
