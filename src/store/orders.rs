//! Order slice: order book with a status filter and newest-first inserts.

use serde::{Deserialize, Serialize};

use super::view::{visible_slice, ListQuery, PageView, Searchable};
use super::MutationOutcome;

/// Status filter value that disables status narrowing.
pub const ALL_STATUSES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub date: String,
    pub total: f64,
    pub status: OrderStatus,
    pub items: u32,
}

impl Searchable for Order {
    // Order ids match case-sensitively; customer names do not. This mirrors
    // how the order search box has always behaved.
    fn matches(&self, needle: &str) -> bool {
        self.id.contains(needle)
            || self.customer.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[derive(Debug, Clone)]
pub struct OrdersState {
    pub items: Vec<Order>,
    pub query: ListQuery,
    pub status_filter: String,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            items: seed_orders(),
            query: ListQuery::default(),
            status_filter: ALL_STATUSES.to_string(),
        }
    }
}

impl OrdersState {
    pub fn set_search_query(&mut self, search: String) {
        self.query.set_search(search);
    }

    pub fn set_status_filter(&mut self, filter: String) {
        self.status_filter = filter;
        self.query.page = 1;
    }

    /// Orders are inserted newest-first, unlike customers and products
    /// which append. Keep the asymmetry.
    pub fn add_order(&mut self, order: Order) {
        self.items.insert(0, order);
    }

    /// Direct overwrite; there is no legal-transition check.
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> MutationOutcome {
        match self.items.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                order.status = status;
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    /// Next numeric order id, as a string like the seeded ones.
    pub fn next_id(&self) -> String {
        let max = self
            .items
            .iter()
            .filter_map(|o| o.id.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    pub fn visible(&self) -> PageView<Order> {
        if self.status_filter == ALL_STATUSES {
            visible_slice(&self.items, &self.query)
        } else {
            let narrowed: Vec<Order> = self
                .items
                .iter()
                .filter(|o| o.status.label() == self.status_filter)
                .cloned()
                .collect();
            visible_slice(&narrowed, &self.query)
        }
    }
}

fn seed_orders() -> Vec<Order> {
    let rows = [
        ("1234", "John Doe", "2025-11-22", 234.00, OrderStatus::Delivered, 3),
        ("1235", "Jane Smith", "2025-11-22", 156.00, OrderStatus::Processing, 2),
        ("1236", "Bob Johnson", "2025-11-21", 89.00, OrderStatus::Pending, 1),
        ("1237", "Alice Brown", "2025-11-21", 445.00, OrderStatus::Shipped, 5),
        ("1238", "Charlie Wilson", "2025-11-20", 267.00, OrderStatus::Processing, 4),
        ("1239", "Diana Prince", "2025-11-20", 123.00, OrderStatus::Delivered, 2),
        ("1240", "Ethan Hunt", "2025-11-19", 567.00, OrderStatus::Cancelled, 6),
        ("1241", "Fiona Green", "2025-11-19", 345.00, OrderStatus::Shipped, 3),
    ];

    rows.into_iter()
        .map(|(id, customer, date, total, status, items)| Order {
            id: id.to_string(),
            customer: customer.to_string(),
            date: date.to_string(),
            total,
            status,
            items,
        })
        .collect()
}
