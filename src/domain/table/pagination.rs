use std::ops::Range;

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page position. Every navigation method returns a state that is
/// valid for the row count it was given; nothing here fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(row_count / page_size)`, never less than one.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn clamped(self, row_count: usize) -> Self {
        let last = self.page_count(row_count) - 1;
        Self {
            page_index: self.page_index.min(last),
            page_size: self.page_size.max(1),
        }
    }

    /// Row range covered by this page; empty when the index overruns.
    pub fn range(&self, row_count: usize) -> Range<usize> {
        let start = self
            .page_index
            .saturating_mul(self.page_size)
            .min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        start..end
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, row_count: usize) -> bool {
        self.page_index + 1 < self.page_count(row_count)
    }

    pub fn first(self) -> Self {
        Self {
            page_index: 0,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self
        }
    }

    pub fn next(self, row_count: usize) -> Self {
        if self.can_next(row_count) {
            Self {
                page_index: self.page_index + 1,
                ..self
            }
        } else {
            self.clamped(row_count)
        }
    }

    pub fn last(self, row_count: usize) -> Self {
        Self {
            page_index: self.page_count(row_count) - 1,
            ..self
        }
    }

    pub fn go_to(self, page_index: usize, row_count: usize) -> Self {
        Self { page_index, ..self }.clamped(row_count)
    }

    /// Switches page size while keeping the first visible row on screen,
    /// then clamps into the new page range.
    pub fn with_page_size(self, page_size: usize, row_count: usize) -> Self {
        let page_size = page_size.max(1);
        let top_row = self.page_index.saturating_mul(self.page_size);
        Self {
            page_index: top_row / page_size,
            page_size,
        }
        .clamped(row_count)
    }

    /// Applies the 1-based "go to page" input.
    ///
    /// Blank input goes to the first page, values below one clamp to the
    /// first page, values past the end clamp to the last page, and input
    /// that is not a number leaves the position unchanged.
    pub fn with_page_input(self, input: &str, row_count: usize) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return self.first();
        }
        let requested = match input.parse::<i64>() {
            Ok(page) => page,
            Err(_) => match input.parse::<f64>() {
                Ok(page) if page.is_finite() => page.trunc() as i64,
                _ => return self.clamped(row_count),
            },
        };
        if requested <= 1 {
            return self.first();
        }
        let page_index = usize::try_from(requested - 1).unwrap_or(usize::MAX);
        self.go_to(page_index, row_count)
    }
}
