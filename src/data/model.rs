// ---------------------------------------------------------------------------
// DataTable – one loaded tabular file
// ---------------------------------------------------------------------------

/// A loaded table: named columns over rows of plain text cells.
///
/// The conversion core consumes exactly one string column, so cells stay
/// untyped text; nothing downstream needs numeric parsing of the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Rows of cells; each row has one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
