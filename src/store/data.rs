//! Data slice: the one remote-backed list, with its load lifecycle.
//!
//! Unlike the seeded slices, this collection starts empty and is filled by
//! a fetch from the placeholder posts API. Load status is a four-phase
//! lifecycle: idle until the first fetch, then loading, then succeeded or
//! failed. A failed load keeps whatever items were already present.

use serde::{Deserialize, Serialize};

use super::view::{page_window, visible_slice, ListQuery, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

impl Searchable for Post {
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.body.to_lowercase().contains(&needle)
    }
}

/// Everything the data page renders in one payload: the visible rows, the
/// pagination footer values, and the load lifecycle fields.
#[derive(Debug, Clone, Serialize)]
pub struct DataView {
    pub items: Vec<Post>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_window: Vec<usize>,
    pub status: LoadStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub items: Vec<Post>,
    pub status: LoadStatus,
    pub error: Option<String>,
    pub query: ListQuery,
}

impl DataState {
    /// Entering `loading` clears any error from a previous attempt.
    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// A successful load replaces the whole collection; there is no merge.
    pub fn load_succeeded(&mut self, items: Vec<Post>) {
        self.status = LoadStatus::Succeeded;
        self.items = items;
    }

    /// A failed load records the message and leaves the items untouched.
    pub fn load_failed(&mut self, message: String) {
        self.status = LoadStatus::Failed;
        self.error = Some(message);
    }

    pub fn set_search_query(&mut self, search: String) {
        self.query.set_search(search);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn view(&self) -> DataView {
        let slice = visible_slice(&self.items, &self.query);
        DataView {
            page_window: page_window(self.query.page, slice.total_pages),
            items: slice.items,
            total_count: slice.total_count,
            total_pages: slice.total_pages,
            page: self.query.page,
            status: self.status,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: u32) -> Vec<Post> {
        (1..=n)
            .map(|id| Post {
                id,
                user_id: (id - 1) / 10 + 1,
                title: format!("post {id}"),
                body: format!("body of post {id}"),
            })
            .collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = DataState::default();
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn successful_load_replaces_the_collection() {
        let mut state = DataState::default();
        state.begin_load();
        assert_eq!(state.status, LoadStatus::Loading);

        state.load_succeeded(posts(100));
        assert_eq!(state.status, LoadStatus::Succeeded);
        assert_eq!(state.items.len(), 100);

        // a later load does not merge
        state.begin_load();
        state.load_succeeded(posts(3));
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn failed_load_keeps_items_and_records_the_message() {
        let mut state = DataState::default();
        state.load_succeeded(posts(10));

        state.begin_load();
        state.load_failed("Failed to fetch data".into());
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch data"));
    }

    #[test]
    fn retry_clears_the_previous_error() {
        let mut state = DataState::default();
        state.begin_load();
        state.load_failed("Failed to fetch data".into());

        state.begin_load();
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn view_paginates_a_hundred_posts_ten_at_a_time() {
        let mut state = DataState::default();
        state.load_succeeded(posts(100));

        let view = state.view();
        assert_eq!(view.total_count, 100);
        assert_eq!(view.total_pages, 10);
        assert_eq!(view.items.len(), 10);
        assert_eq!(view.items[0].id, 1);
        assert_eq!(view.page_window, vec![1, 2, 3, 4, 5]);

        state.set_page(7);
        let view = state.view();
        assert_eq!(view.items[0].id, 61);
        assert_eq!(view.page_window, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn search_filters_title_and_body_and_resets_page() {
        let mut state = DataState::default();
        state.load_succeeded(posts(100));
        state.set_page(5);

        state.set_search_query("post 42".into());
        let view = state.view();
        assert_eq!(view.page, 1);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.items[0].id, 42);
    }

    #[test]
    fn post_decodes_from_placeholder_wire_format() {
        let post: Post = serde_json::from_str(
            r#"{"userId": 1, "id": 7, "title": "t", "body": "b"}"#,
        )
        .unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 7);
    }
}
