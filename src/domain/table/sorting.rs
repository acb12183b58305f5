#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => " 🔼",
            SortDirection::Desc => " 🔽",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub column_id: String,
    pub descending: bool,
}

impl ColumnSort {
    pub fn direction(&self) -> SortDirection {
        if self.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Ordered sort criteria; the first entry is the primary key. Empty keeps
/// rows in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortingState(Vec<ColumnSort>);

impl SortingState {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn criteria(&self) -> &[ColumnSort] {
        &self.0
    }

    pub fn direction_for(&self, column_id: &str) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|sort| sort.column_id == column_id)
            .map(ColumnSort::direction)
    }

    /// Advances `column_id` through ascending, descending, unsorted.
    ///
    /// Without `multi` the result holds at most that one column. With
    /// `multi` the other criteria are kept and a newly sorted column is
    /// appended as the lowest-priority key.
    pub fn toggled(&self, column_id: &str, multi: bool) -> Self {
        let next = match self.direction_for(column_id) {
            None => Some(false),
            Some(SortDirection::Asc) => Some(true),
            Some(SortDirection::Desc) => None,
        };

        if !multi {
            return SortingState(
                next.map(|descending| ColumnSort {
                    column_id: column_id.to_string(),
                    descending,
                })
                .into_iter()
                .collect(),
            );
        }

        let mut criteria = self.0.clone();
        match (criteria.iter().position(|sort| sort.column_id == column_id), next) {
            (Some(idx), Some(descending)) => criteria[idx].descending = descending,
            (Some(idx), None) => {
                criteria.remove(idx);
            }
            (None, Some(descending)) => criteria.push(ColumnSort {
                column_id: column_id.to_string(),
                descending,
            }),
            (None, None) => {}
        }
        SortingState(criteria)
    }
}
