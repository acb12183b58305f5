use std::fmt;

use crate::domain::table::cell::CellValue;
use crate::domain::table::sorting::SortDirection;

/// Stable identity of a row for selection purposes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(pub String);

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey(value)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row types rendered by the data table.
///
/// `row_key` must be unique within one data set; selection never falls back
/// to comparing row contents. `field` resolves the accessor keys used by
/// [`Accessor::Key`] columns and returns [`CellValue::Empty`] for unknown keys.
pub trait TableRow: Clone + PartialEq + 'static {
    fn row_key(&self) -> RowKey;

    fn field(&self, key: &str) -> CellValue;
}

pub enum Accessor<T> {
    Key(&'static str),
    Compute(fn(&T) -> CellValue),
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Key(key) => Accessor::Key(key),
            Accessor::Compute(f) => Accessor::Compute(*f),
        }
    }
}

#[derive(Clone)]
pub enum ColumnHeader {
    Text(String),
    Render(fn(Option<SortDirection>) -> String),
}

pub struct ColumnDef<T> {
    pub id: String,
    pub header: ColumnHeader,
    pub accessor: Accessor<T>,
    pub sortable: bool,
    pub cell: Option<fn(&CellValue) -> String>,
}

impl<T: TableRow> ColumnDef<T> {
    /// Column reading `key` through [`TableRow::field`]; the key doubles as
    /// the column id.
    pub fn accessor(key: &'static str, header: impl Into<String>) -> Self {
        Self {
            id: key.to_string(),
            header: ColumnHeader::Text(header.into()),
            accessor: Accessor::Key(key),
            sortable: true,
            cell: None,
        }
    }

    pub fn computed(
        id: impl Into<String>,
        header: impl Into<String>,
        compute: fn(&T) -> CellValue,
    ) -> Self {
        Self {
            id: id.into(),
            header: ColumnHeader::Text(header.into()),
            accessor: Accessor::Compute(compute),
            sortable: true,
            cell: None,
        }
    }

    pub fn header_renderer(mut self, render: fn(Option<SortDirection>) -> String) -> Self {
        self.header = ColumnHeader::Render(render);
        self
    }

    pub fn cell_renderer(mut self, render: fn(&CellValue) -> String) -> Self {
        self.cell = Some(render);
        self
    }

    pub fn disable_sorting(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        match &self.accessor {
            Accessor::Key(key) => row.field(key),
            Accessor::Compute(compute) => compute(row),
        }
    }

    pub fn render_cell(&self, row: &T) -> String {
        let value = self.value(row);
        match self.cell {
            Some(render) => render(&value),
            None => value.to_string(),
        }
    }

    pub fn render_header(&self, sort: Option<SortDirection>) -> String {
        match &self.header {
            ColumnHeader::Text(label) => label.clone(),
            ColumnHeader::Render(render) => render(sort),
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            cell: self.cell,
        }
    }
}

// Columns are fixed for a table's lifetime, so identity is the id plus the
// header text.
impl<T> PartialEq for ColumnDef<T> {
    fn eq(&self, other: &Self) -> bool {
        let same_header = match (&self.header, &other.header) {
            (ColumnHeader::Text(left), ColumnHeader::Text(right)) => left == right,
            (ColumnHeader::Render(_), ColumnHeader::Render(_)) => true,
            _ => false,
        };
        self.id == other.id && self.sortable == other.sortable && same_header
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = match &self.header {
            ColumnHeader::Text(label) => label.as_str(),
            ColumnHeader::Render(_) => "<render>",
        };
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &header)
            .field("sortable", &self.sortable)
            .finish()
    }
}
