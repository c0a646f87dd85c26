//! In-memory list state for the dashboard pages.
//!
//! Each page-backing slice owns a collection plus its query state and is
//! mutated only through the intent methods it declares. Derived views are
//! recomputed on demand; nothing is cached.

pub mod customers;
pub mod data;
pub mod orders;
pub mod products;
pub mod view;

/// Result of an update/toggle/delete intent. Unknown ids are a soft no-op
/// at the store level; the outcome lets callers decide whether to surface
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Updated,
    NotFound,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, MutationOutcome::Updated)
    }
}
