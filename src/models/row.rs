// src/models/row.rs

/// One spreadsheet row as optional cell texts.
///
/// Trailing empty cells are dropped on construction so `len()` reflects the
/// last populated column, the way a row-oriented sheet reader reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn new(mut cells: Vec<Option<String>>) -> Self {
        while matches!(cells.last(), Some(None)) {
            cells.pop();
        }
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `index`; `None` past the end or for an empty cell.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Cell text at `index`, empty string when absent.
    pub fn text(&self, index: usize) -> &str {
        self.cell(index).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for Row {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(|c| c.map(Into::into)).collect())
    }
}
