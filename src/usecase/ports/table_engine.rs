use crate::domain::table::column::{ColumnDef, TableRow};
use crate::domain::table::pagination::PaginationState;
use crate::domain::table::sorting::{SortDirection, SortingState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column_id: String,
    pub label: String,
    pub sort: Option<SortDirection>,
    pub sortable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderGroup {
    pub id: String,
    pub headers: Vec<HeaderCell>,
}

/// Table-modeling capability: turns column descriptors, rows and the
/// sorting/pagination state into header groups and row views.
pub trait TableEngine<T: TableRow> {
    /// All rows in sorted order. Rows that compare equal keep their input
    /// order.
    fn sorted_rows<'a>(
        &self,
        columns: &[ColumnDef<T>],
        rows: &'a [T],
        sorting: &SortingState,
    ) -> Vec<&'a T>;

    fn header_groups(&self, columns: &[ColumnDef<T>], sorting: &SortingState) -> Vec<HeaderGroup>;

    fn paginate<'a>(&self, sorted: Vec<&'a T>, pagination: &PaginationState) -> Vec<&'a T> {
        let range = pagination.range(sorted.len());
        sorted
            .into_iter()
            .skip(range.start)
            .take(range.end - range.start)
            .collect()
    }

    fn page_count(&self, row_count: usize, pagination: &PaginationState) -> usize {
        pagination.page_count(row_count)
    }
}
