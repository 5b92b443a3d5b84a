//! Core table types for symfilter-core.
//!
//! A [`Table`] is an ordered sequence of [`Row`]s where row 0 is always the
//! header. Each row holds an ordered sequence of [`Cell`]s and a
//! [`Visibility`] flag that the row filter overwrites in place.

/// Whether a row is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Shown => write!(f, "shown"),
            Visibility::Hidden => write!(f, "hidden"),
        }
    }
}

/// One column value within a row: its visible text content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell(String);

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// One horizontal entry in the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Rank label rendered in front of the cells (`#1`, `#2`, …). Never
    /// takes part in matching.
    pub label: Option<String>,
    pub cells: Vec<Cell>,
    visibility: Visibility,
}

impl Row {
    /// A shown row with the given cells and no label.
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        Self {
            label: None,
            cells: cells.into_iter().map(Into::into).collect(),
            visibility: Visibility::Shown,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The only cell that participates in matching.
    pub fn first_cell(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

/// An ordered sequence of rows; index 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Row, rows: impl IntoIterator<Item = Row>) -> Self {
        let mut all = vec![header];
        all.extend(rows);
        Self { rows: all }
    }

    pub fn header(&self) -> &Row {
        &self.rows[0]
    }

    /// All rows, header included at index 0.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[1..]
    }

    /// Indices (into [`Table::rows`]) of data rows that are currently shown.
    pub fn visible_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, row)| row.is_visible())
            .map(|(i, _)| i)
            .collect()
    }

    /// Total row count, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.len() <= 1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
