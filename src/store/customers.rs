//! Customer slice: the seeded customer book plus its search state.

use serde::{Deserialize, Serialize};

use super::view::{visible_slice, ListQuery, PageView, Searchable};
use super::MutationOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    Active,
    Inactive,
}

impl CustomerStatus {
    pub fn toggled(self) -> Self {
        match self {
            CustomerStatus::Active => CustomerStatus::Inactive,
            CustomerStatus::Inactive => CustomerStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub orders: u32,
    pub total_spent: f64,
    pub status: CustomerStatus,
}

impl Searchable for Customer {
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone)]
pub struct CustomersState {
    pub items: Vec<Customer>,
    pub query: ListQuery,
}

impl Default for CustomersState {
    fn default() -> Self {
        Self {
            items: seed_customers(),
            query: ListQuery::default(),
        }
    }
}

impl CustomersState {
    pub fn set_search_query(&mut self, search: String) {
        self.query.set_search(search);
    }

    /// New customers go to the end of the book.
    pub fn add_customer(&mut self, customer: Customer) {
        self.items.push(customer);
    }

    /// Replaces the record with the matching id wholesale.
    pub fn update_customer(&mut self, customer: Customer) -> MutationOutcome {
        match self.items.iter_mut().find(|c| c.id == customer.id) {
            Some(slot) => {
                *slot = customer;
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn toggle_status(&mut self, id: u32) -> MutationOutcome {
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.status = customer.status.toggled();
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    pub fn visible(&self) -> PageView<Customer> {
        visible_slice(&self.items, &self.query)
    }
}

fn seed_customers() -> Vec<Customer> {
    let rows = [
        (1, "John Doe", "john@example.com", "+1 234 567 8900", "New York, USA", 12, 1234.50, CustomerStatus::Active),
        (2, "Jane Smith", "jane@example.com", "+1 234 567 8901", "Los Angeles, USA", 8, 856.00, CustomerStatus::Active),
        (3, "Bob Johnson", "bob@example.com", "+1 234 567 8902", "Chicago, USA", 5, 445.00, CustomerStatus::Inactive),
        (4, "Alice Brown", "alice@example.com", "+1 234 567 8903", "Houston, USA", 15, 2145.00, CustomerStatus::Active),
        (5, "Charlie Wilson", "charlie@example.com", "+1 234 567 8904", "Phoenix, USA", 3, 267.00, CustomerStatus::Active),
        (6, "Diana Prince", "diana@example.com", "+1 234 567 8905", "Philadelphia, USA", 20, 3456.00, CustomerStatus::Active),
    ];

    rows.into_iter()
        .map(|(id, name, email, phone, location, orders, total_spent, status)| Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            orders,
            total_spent,
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_six_customers() {
        let state = CustomersState::default();
        assert_eq!(state.items.len(), 6);
        assert_eq!(state.items[0].name, "John Doe");
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let mut state = CustomersState::default();

        state.set_search_query("jane".into());
        let view = state.visible();
        assert_eq!(view.total_count, 1);
        assert_eq!(view.items[0].name, "Jane Smith");

        // email side of the match
        state.set_search_query("BOB@".into());
        assert_eq!(state.visible().items[0].name, "Bob Johnson");
    }

    #[test]
    fn no_match_leaves_page_at_one() {
        let mut state = CustomersState::default();
        state.set_search_query("nomatch".into());
        let view = state.visible();
        assert_eq!(view.total_count, 0);
        assert_eq!(view.total_pages, 0);
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn add_customer_appends() {
        let mut state = CustomersState::default();
        let customer = Customer {
            id: state.next_id(),
            name: "Eve Adams".into(),
            email: "eve@example.com".into(),
            phone: "+1 234 567 8906".into(),
            location: "Boston, USA".into(),
            orders: 0,
            total_spent: 0.0,
            status: CustomerStatus::Active,
        };
        state.add_customer(customer);
        assert_eq!(state.items.last().unwrap().id, 7);
    }

    #[test]
    fn toggle_flips_exactly_one_record() {
        let mut state = CustomersState::default();
        let before = state.items.clone();

        assert_eq!(state.toggle_status(3), MutationOutcome::Updated);
        assert_eq!(state.items[2].status, CustomerStatus::Active);
        for (i, customer) in state.items.iter().enumerate() {
            if i != 2 {
                assert_eq!(customer, &before[i]);
            }
        }
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut state = CustomersState::default();
        let before = state.items.clone();
        assert_eq!(state.toggle_status(999), MutationOutcome::NotFound);
        assert_eq!(state.items, before);
    }

    #[test]
    fn update_replaces_record_by_id() {
        let mut state = CustomersState::default();
        let mut updated = state.items[1].clone();
        updated.location = "Seattle, USA".into();

        assert_eq!(state.update_customer(updated), MutationOutcome::Updated);
        assert_eq!(state.items[1].location, "Seattle, USA");
    }

    #[test]
    fn update_unknown_id_reports_not_found() {
        let mut state = CustomersState::default();
        let mut ghost = state.items[0].clone();
        ghost.id = 42;
        let before = state.items.clone();

        assert_eq!(state.update_customer(ghost), MutationOutcome::NotFound);
        assert_eq!(state.items, before);
    }
}
