use std::collections::BTreeSet;

use crate::domain::table::column::{RowKey, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    NoneSelected,
    PartiallySelected,
    AllSelected,
}

/// Selected row keys for one table.
///
/// The tracker is the only owner of selection membership. The select-all
/// checkbox state is never stored; it is derived from the keys against the
/// rows currently loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    selected: BTreeSet<RowKey>,
}

impl SelectionTracker {
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flips membership of `key`; returns whether it is selected afterwards.
    pub fn toggle_row(&mut self, key: RowKey) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn status<T: TableRow>(&self, rows: &[T]) -> SelectionStatus {
        let selected = rows
            .iter()
            .filter(|row| self.is_selected(&row.row_key()))
            .count();
        if selected == 0 {
            SelectionStatus::NoneSelected
        } else if selected == rows.len() {
            SelectionStatus::AllSelected
        } else {
            SelectionStatus::PartiallySelected
        }
    }

    /// Selects every loaded row, or clears the selection when every loaded
    /// row is already selected. Returns whether rows are selected afterwards.
    pub fn toggle_all<T: TableRow>(&mut self, rows: &[T]) -> bool {
        if self.status(rows) == SelectionStatus::AllSelected {
            self.selected.clear();
            return false;
        }
        self.selected.extend(rows.iter().map(TableRow::row_key));
        !rows.is_empty()
    }

    /// Drops keys of rows that are no longer loaded.
    pub fn retain<T: TableRow>(&mut self, rows: &[T]) {
        let loaded: BTreeSet<RowKey> = rows.iter().map(TableRow::row_key).collect();
        self.selected.retain(|key| loaded.contains(key));
    }

    pub fn selected_rows<'a, T: TableRow>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter()
            .filter(|row| self.is_selected(&row.row_key()))
            .collect()
    }
}
