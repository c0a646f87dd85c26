//! Derived view calculation for list-bearing pages.
//!
//! Every page that renders a collection goes through the same pipeline:
//! filter by the stored search text, then slice out the current page. The
//! functions here are pure; slices own the inputs and call in on demand.

use serde::{Deserialize, Serialize};

/// Default number of rows per page, shared by every list page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A record that can be matched against free-text search. Implementations
/// decide which attributes participate and how case is handled.
pub trait Searchable {
    /// True when the record's searched attributes contain `needle`.
    /// An empty needle matches everything.
    fn matches(&self, needle: &str) -> bool;
}

/// Per-slice query state: free-text search plus a pagination cursor.
///
/// The store never clamps `page` against the page count; that is the
/// consumer's job since the count depends on the current filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    /// Replaces the search text and snaps back to the first page, so a
    /// narrowed result set cannot leave the cursor on an empty page.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

/// The slice of records a page should render, plus the counts its
/// pagination footer needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Filters `items` by the query's search text and returns the requested
/// page. `total_pages` is 0 when nothing matches; a page past the end
/// yields an empty `items` with the counts intact.
pub fn visible_slice<T>(items: &[T], query: &ListQuery) -> PageView<T>
where
    T: Searchable + Clone,
{
    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| item.matches(&query.search))
        .collect();

    let total_count = filtered.len();
    let total_pages = if total_count == 0 {
        0
    } else {
        total_count.div_ceil(query.page_size)
    };
    let start = (query.page.saturating_sub(1)) * query.page_size;

    let items = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .cloned()
        .collect();

    PageView {
        items,
        total_count,
        total_pages,
    }
}

/// Computes the page-number buttons to render: at most five, centered on
/// `current_page` once it moves past 3, with per-slot clamping at the top
/// end. The clamp rule is pinned to match the shipped UI exactly, so keep
/// the arithmetic as-is.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<usize> {
    let len = total_pages.min(5);
    (0..len)
        .map(|i| {
            let mut page = i + 1;
            if total_pages > 5 {
                if current_page > 3 {
                    page = current_page - 2 + i;
                }
                if page > total_pages {
                    page = total_pages - (4 - i);
                }
            }
            page
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str);

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            self.0.to_lowercase().contains(&needle.to_lowercase())
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        std::iter::repeat(Row("row")).take(n).collect()
    }

    #[test]
    fn empty_search_matches_everything() {
        let items = rows(7);
        let view = visible_slice(&items, &ListQuery::default());
        assert_eq!(view.total_count, 7);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.items.len(), 7);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![Row("Wireless Mouse"), Row("Keyboard"), Row("mouse pad")];
        let query = ListQuery {
            search: "MOUSE".into(),
            ..ListQuery::default()
        };
        let view = visible_slice(&items, &query);
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn total_pages_is_zero_for_empty_result() {
        let items = rows(5);
        let query = ListQuery {
            search: "nomatch".into(),
            ..ListQuery::default()
        };
        let view = visible_slice(&items, &query);
        assert_eq!(view.total_count, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn pages_partition_the_filtered_collection() {
        let items: Vec<Row> = (0..23).map(|_| Row("row")).collect();
        let mut query = ListQuery {
            page_size: 5,
            ..ListQuery::default()
        };

        let total_pages = visible_slice(&items, &query).total_pages;
        assert_eq!(total_pages, 5);

        let mut reassembled = Vec::new();
        for page in 1..=total_pages {
            query.page = page;
            reassembled.extend(visible_slice(&items, &query).items);
        }
        assert_eq!(reassembled.len(), items.len());
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_counts() {
        let items = rows(8);
        let query = ListQuery {
            page: 3,
            page_size: 5,
            ..ListQuery::default()
        };
        let view = visible_slice(&items, &query);
        assert!(view.items.is_empty());
        assert_eq!(view.total_count, 8);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn set_search_resets_page() {
        let mut query = ListQuery {
            page: 4,
            ..ListQuery::default()
        };
        query.set_search("test".into());
        assert_eq!(query.search, "test");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn window_shows_all_pages_when_five_or_fewer() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 5), vec![1, 2, 3, 4, 5]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn window_stays_at_front_until_page_four() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn window_centers_on_current_page_in_the_middle() {
        assert_eq!(page_window(7, 10), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_clamps_per_slot_at_the_top_end() {
        // The shipped clamp adjusts only the slots that overflow.
        assert_eq!(page_window(9, 10), vec![7, 8, 9, 10, 10]);
        assert_eq!(page_window(10, 10), vec![8, 9, 10, 9, 10]);
    }
}
