//! Configuration types for symfilter.
//!
//! [`Config::load`] reads `~/.config/symfilter/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::summary::check_date_format;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme             = "default"
show_rank         = true
date_format       = "%B %d, %Y"
highlight_matches = true

[table]
# source = "~/stocks/summaries.json"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/symfilter/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Theme name: `default` or `gruvbox`.
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_rank")]
    pub show_rank: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_highlight_matches")]
    pub highlight_matches: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_rank() -> bool { true }
fn default_date_format() -> String { "%B %d, %Y".to_string() }
fn default_highlight_matches() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_rank: default_show_rank(),
            date_format: default_date_format(),
            highlight_matches: default_highlight_matches(),
        }
    }
}

/// `[table]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// Table source used when `--table` is not given.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/symfilter/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Ok(Self::load_from(&path)?)
    }

    /// Load from an explicit path layered on the built-in defaults. A missing
    /// file yields the defaults; an unusable `date_format` is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()?;
        check_date_format(&cfg.ui.date_format)?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("symfilter")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_load() {
        let cfg = Config::defaults();
        assert_eq!(cfg.ui.theme, "default");
        assert!(cfg.ui.show_rank);
        assert!(cfg.ui.highlight_matches);
        assert_eq!(cfg.ui.date_format, "%B %d, %Y");
        assert!(cfg.table.source.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[ui]\nshow_rank = false\n\n[table]\nsource = \"/tmp/stocks.json\"\n"
        )
        .unwrap();

        let cfg = Config::load_from(file.path()).unwrap();
        assert!(!cfg.ui.show_rank);
        // untouched keys keep their defaults
        assert!(cfg.ui.highlight_matches);
        assert_eq!(cfg.table.source, Some(PathBuf::from("/tmp/stocks.json")));
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[ui]\ndate_format = \"%Q\"\n").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::DateFormat { .. }), "{err}");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/symfilter.toml")).unwrap();
        assert!(cfg.ui.show_rank);
    }
}
