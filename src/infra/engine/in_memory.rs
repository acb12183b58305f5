use std::cmp::Ordering;

use crate::domain::table::column::{ColumnDef, TableRow};
use crate::domain::table::sorting::SortingState;
use crate::usecase::ports::table_engine::{HeaderCell, HeaderGroup, TableEngine};

/// Sorts and slices rows held in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InMemoryEngine;

impl<T: TableRow> TableEngine<T> for InMemoryEngine {
    fn sorted_rows<'a>(
        &self,
        columns: &[ColumnDef<T>],
        rows: &'a [T],
        sorting: &SortingState,
    ) -> Vec<&'a T> {
        let mut sorted: Vec<&'a T> = rows.iter().collect();
        // Criteria naming unknown or non-sortable columns are skipped.
        let keys: Vec<(&ColumnDef<T>, bool)> = sorting
            .criteria()
            .iter()
            .filter_map(|sort| {
                columns
                    .iter()
                    .find(|column| column.id == sort.column_id && column.sortable)
                    .map(|column| (column, sort.descending))
            })
            .collect();
        if keys.is_empty() {
            return sorted;
        }

        sorted.sort_by(|left, right| {
            keys.iter()
                .map(|(column, descending)| {
                    let ordering = column.value(left).compare(&column.value(right));
                    if *descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    fn header_groups(&self, columns: &[ColumnDef<T>], sorting: &SortingState) -> Vec<HeaderGroup> {
        let headers = columns
            .iter()
            .map(|column| {
                let sort = sorting.direction_for(&column.id);
                HeaderCell {
                    column_id: column.id.clone(),
                    label: column.render_header(sort),
                    sort,
                    sortable: column.sortable,
                }
            })
            .collect();
        vec![HeaderGroup {
            id: "0".to_string(),
            headers,
        }]
    }
}
