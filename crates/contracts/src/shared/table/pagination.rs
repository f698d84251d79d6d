//! Page slicing with clamping. Every function here is total: out-of-range
//! input is corrected to the nearest valid boundary instead of failing.

/// Caller-supplied page size defaults and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub initial_rows_per_page: usize,
    pub min_rows_per_page: usize,
    pub max_rows_per_page: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            initial_rows_per_page: 10,
            min_rows_per_page: 5,
            max_rows_per_page: 100,
        }
    }
}

impl PaginationOptions {
    /// Guarantees `1 <= min <= max` and `initial` within the bounds.
    pub fn normalized(self) -> Self {
        let min = self.min_rows_per_page.max(1);
        let max = self.max_rows_per_page.max(min);
        Self {
            initial_rows_per_page: self.initial_rows_per_page.clamp(min, max),
            min_rows_per_page: min,
            max_rows_per_page: max,
        }
    }

    pub fn clamp_rows_per_page(&self, requested: i64) -> usize {
        let min = self.min_rows_per_page.max(1);
        let max = self.max_rows_per_page.max(min);
        if requested <= min as i64 {
            min
        } else if requested >= max as i64 {
            max
        } else {
            requested as usize
        }
    }
}

/// `current_page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub rows_per_page: usize,
}

/// One page of rows plus the metadata the pagination controls display.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub rows_per_page: usize,
    pub total_rows: usize,
    /// Set when the requested page was past the end and got pulled back.
    pub page_corrected: bool,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based index of the first row on the page, 0 for an empty table.
    pub fn first_row_number(&self) -> usize {
        if self.total_rows == 0 {
            0
        } else {
            (self.current_page - 1) * self.rows_per_page + 1
        }
    }

    pub fn last_row_number(&self) -> usize {
        (self.current_page * self.rows_per_page).min(self.total_rows)
    }
}

/// `max(1, ceil(total_rows / rows_per_page))`
pub fn total_pages(total_rows: usize, rows_per_page: usize) -> usize {
    total_rows.div_ceil(rows_per_page.max(1)).max(1)
}

pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested <= 1 {
        1
    } else if requested >= last as i64 {
        last
    } else {
        requested as usize
    }
}

/// Slices `sorted` for the requested page. A page past the end (the
/// collection shrank) is corrected to the last page before slicing.
pub fn paginate<T: Clone>(sorted: &[T], state: &PaginationState) -> Page<T> {
    let rows_per_page = state.rows_per_page.max(1);
    let total_rows = sorted.len();
    let total_pages = total_pages(total_rows, rows_per_page);
    let current_page = state.current_page.clamp(1, total_pages);

    let start = (current_page - 1) * rows_per_page;
    let end = (start + rows_per_page).min(total_rows);
    let rows = sorted.get(start..end).unwrap_or(&[]).to_vec();

    Page {
        rows,
        current_page,
        total_pages,
        rows_per_page,
        total_rows,
        page_corrected: current_page != state.current_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("item-{i}")).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_first_page_length() {
        for len in [0usize, 1, 4, 9, 10, 11, 37] {
            for rows_per_page in [1usize, 3, 10, 25] {
                let data = items(len);
                let page = paginate(
                    &data,
                    &PaginationState {
                        current_page: 1,
                        rows_per_page,
                    },
                );
                assert_eq!(page.rows.len(), rows_per_page.min(len));
            }
        }
    }

    #[test]
    fn test_pages_reconstruct_collection() {
        let data = items(23);
        let rows_per_page = 5;
        let pages = total_pages(data.len(), rows_per_page);
        let mut joined = Vec::new();
        for current_page in 1..=pages {
            let page = paginate(
                &data,
                &PaginationState {
                    current_page,
                    rows_per_page,
                },
            );
            assert!(!page.page_corrected);
            joined.extend(page.rows);
        }
        assert_eq!(joined, data);
    }

    #[test]
    fn test_page_past_end_is_corrected() {
        let data = items(12);
        let page = paginate(
            &data,
            &PaginationState {
                current_page: 5,
                rows_per_page: 10,
            },
        );
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 2);
        assert!(page.page_corrected);
        assert_eq!(page.rows, vec!["item-11".to_string(), "item-12".to_string()]);
    }

    #[test]
    fn test_empty_collection_is_page_one_of_one() {
        let data: Vec<String> = Vec::new();
        let page = paginate(
            &data,
            &PaginationState {
                current_page: 3,
                rows_per_page: 10,
            },
        );
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.first_row_number(), 0);
        assert_eq!(page.last_row_number(), 0);
    }

    #[test]
    fn test_row_numbers() {
        let data = items(25);
        let page = paginate(
            &data,
            &PaginationState {
                current_page: 3,
                rows_per_page: 10,
            },
        );
        assert_eq!(page.first_row_number(), 21);
        assert_eq!(page.last_row_number(), 25);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_clamp_rows_per_page() {
        let options = PaginationOptions::default();
        assert_eq!(options.clamp_rows_per_page(-3), 5);
        assert_eq!(options.clamp_rows_per_page(0), 5);
        assert_eq!(options.clamp_rows_per_page(42), 42);
        assert_eq!(options.clamp_rows_per_page(10_000), 100);
    }

    #[test]
    fn test_normalized_options() {
        let options = PaginationOptions {
            initial_rows_per_page: 500,
            min_rows_per_page: 0,
            max_rows_per_page: 0,
        }
        .normalized();
        assert_eq!(options.min_rows_per_page, 1);
        assert_eq!(options.max_rows_per_page, 1);
        assert_eq!(options.initial_rows_per_page, 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(1_000_000, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
