use crate::domain::table::column::{ColumnDef, TableRow};
use crate::domain::table::pagination::PaginationState;
use crate::domain::table::sorting::SortingState;
use crate::infra::engine::in_memory::InMemoryEngine;
use crate::usecase::ports::table_engine::{HeaderGroup, TableEngine};

/// Sorting and pagination chosen by the user, independent of the rows.
///
/// The stored page index may point past the loaded rows; every view built
/// from it clamps against the current row count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableState {
    pub sorting: SortingState,
    pub pagination: PaginationState,
}

impl TableState {
    pub fn new(pagination: PaginationState) -> Self {
        Self {
            sorting: SortingState::default(),
            pagination,
        }
    }

    /// Header click. Unknown and non-sortable columns leave sorting
    /// untouched; otherwise the order changes and the view returns to the
    /// first page. Returns whether the sorting changed.
    pub fn toggle_sorting<T: TableRow>(
        &mut self,
        columns: &[ColumnDef<T>],
        column_id: &str,
        multi: bool,
    ) -> bool {
        let sortable = columns
            .iter()
            .any(|column| column.id == column_id && column.sortable);
        if !sortable {
            return false;
        }
        let next = self.sorting.toggled(column_id, multi);
        self.set_sorting(next);
        true
    }

    /// Replaces the sort criteria and returns to the first page.
    pub fn set_sorting(&mut self, next: SortingState) {
        self.sorting = next;
        self.pagination = self.pagination.first();
    }

    pub fn set_pagination(&mut self, next: PaginationState, row_count: usize) {
        self.pagination = next.clamped(row_count);
    }

    /// Clamps the stored page index once rows are loaded. An empty row set
    /// leaves the requested index alone so it still applies when the rows
    /// arrive. Returns whether the state changed.
    pub fn settle(&mut self, row_count: usize) -> bool {
        if row_count == 0 {
            return false;
        }
        let clamped = self.pagination.clamped(row_count);
        if clamped == self.pagination {
            return false;
        }
        self.pagination = clamped;
        true
    }
}

/// Drives a [`TableEngine`] with sorting and pagination state.
///
/// Built from the current rows on every render. The page index is clamped
/// into `[0, page_count - 1]` on construction, so the visible slice is never
/// an overrun page.
pub struct TableAdapter<T: TableRow, E: TableEngine<T> = InMemoryEngine> {
    columns: Vec<ColumnDef<T>>,
    rows: Vec<T>,
    state: TableState,
    engine: E,
}

impl<T: TableRow> TableAdapter<T, InMemoryEngine> {
    pub fn from_state(columns: Vec<ColumnDef<T>>, rows: Vec<T>, state: TableState) -> Self {
        Self::with_engine(InMemoryEngine, columns, rows, state)
    }
}

impl<T: TableRow, E: TableEngine<T>> TableAdapter<T, E> {
    pub fn with_engine(
        engine: E,
        columns: Vec<ColumnDef<T>>,
        rows: Vec<T>,
        mut state: TableState,
    ) -> Self {
        state.pagination = state.pagination.clamped(rows.len());
        Self {
            columns,
            rows,
            state,
            engine,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn sorted_rows(&self) -> Vec<&T> {
        self.engine
            .sorted_rows(&self.columns, &self.rows, &self.state.sorting)
    }

    pub fn visible_rows(&self) -> Vec<&T> {
        self.engine
            .paginate(self.sorted_rows(), &self.state.pagination)
    }

    pub fn header_groups(&self) -> Vec<HeaderGroup> {
        self.engine.header_groups(&self.columns, &self.state.sorting)
    }

    pub fn page_count(&self) -> usize {
        self.engine
            .page_count(self.rows.len(), &self.state.pagination)
    }

    pub fn can_previous(&self) -> bool {
        self.state.pagination.can_previous()
    }

    pub fn can_next(&self) -> bool {
        self.state.pagination.can_next(self.rows.len())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<T> {
    pub row: T,
    pub cells: Vec<String>,
}

/// Owned snapshot of everything a render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub header_groups: Vec<HeaderGroup>,
    pub rows: Vec<VisibleRow<T>>,
    pub pagination: PaginationState,
    pub row_count: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl<T: TableRow, E: TableEngine<T>> TableAdapter<T, E> {
    pub fn view(&self) -> TableView<T> {
        let rows = self
            .visible_rows()
            .into_iter()
            .map(|row| VisibleRow {
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.render_cell(row))
                    .collect(),
                row: row.clone(),
            })
            .collect();
        TableView {
            header_groups: self.header_groups(),
            rows,
            pagination: self.state.pagination,
            row_count: self.row_count(),
            page_count: self.page_count(),
            can_previous: self.can_previous(),
            can_next: self.can_next(),
        }
    }
}
