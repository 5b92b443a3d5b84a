#![allow(unused)]
//! Headless mode process-level integration harness.
//!
//! # What this covers
//!
//! This harness runs `symfilter --headless` as a compiled binary and checks
//! what a user or another CLI tool would observe: stdout contents and exit
//! codes. Each run points `XDG_CONFIG_HOME` at a temp dir so the user's real
//! config is never read or created.
//!
//! # Running
//!
//! ```sh
//! cargo test --test headless_harness
//! ```

mod common;
use common::*;

use std::io::Write;
use std::process::{Command, Output};

fn symfilter(args: &[&str]) -> Output {
    let config_home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_symfilter"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn sample_table_with_query() {
    let output = symfilter(&["--headless", "--query", "goo"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines[0].starts_with("Symbol\t"));
    let symbols: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(symbols, vec!["GOOG", "GOOGL"]);
}

#[test]
fn empty_query_prints_every_row() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    write!(file, "Symbol\nAAPL\nGOOG\nMSFT\n").unwrap();

    let output = symfilter(&["--headless", "--table", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Symbol", "AAPL", "GOOG", "MSFT"]);
}

#[test]
fn no_match_prints_header_only() {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    write!(file, "Symbol\nAAPL\nGOOG\nMSFT\n").unwrap();

    let output = symfilter(&[
        "--headless",
        "--table",
        file.path().to_str().unwrap(),
        "--query",
        "ZZZ",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Symbol"]);
}

#[test]
fn missing_table_exits_nonzero() {
    let output = symfilter(&["--headless", "--table", "/nonexistent/stocks.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/stocks.json"));
}

#[test]
fn explicit_config_supplies_table_source() {
    let mut table = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    write!(table, "Ticker\nNVDA\nTSLA\n").unwrap();

    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(config, "[table]\nsource = {:?}\n", table.path().to_str().unwrap()).unwrap();

    let output = symfilter(&[
        "--headless",
        "--config",
        config.path().to_str().unwrap(),
        "--query",
        "t",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Ticker", "TSLA"]);
}

#[test]
fn unusable_date_format_exits_nonzero() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(config, "[ui]\ndate_format = \"%Q\"\n").unwrap();

    let output = symfilter(&["--headless", "--config", config.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid date format"));
    assert!(output.stdout.is_empty());
}
