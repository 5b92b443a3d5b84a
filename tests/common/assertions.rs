//! Domain-specific assertion macros for symfilter harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! row-filter invariant was violated.

/// Assert that exactly the given symbols are shown, in table order.
///
/// ```rust
/// assert_shown!(table, ["GOOG"]);
/// ```
#[macro_export]
macro_rules! assert_shown {
    ($table:expr, [$($sym:expr),* $(,)?]) => {{
        let expected: Vec<String> = vec![$($sym.to_string()),*];
        let actual = $crate::common::builders::shown_symbols(&$table);
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_shown! failed: shown rows differ from expected"
        );
    }};
}

/// Assert that the header row is still shown.
#[macro_export]
macro_rules! assert_header_shown {
    ($table:expr) => {{
        let table: &symfilter_core::Table = &$table;
        if !table.header().is_visible() {
            panic!("assert_header_shown! failed: the row filter hid the header row");
        }
    }};
}
