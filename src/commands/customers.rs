//! Customer commands for the customer relationship pages

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use crate::store::customers::{Customer, CustomerStatus};
use crate::store::view::PageView;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[tauri::command]
pub fn get_customers(state: State<'_, AppState>) -> Result<PageView<Customer>, String> {
    let customers = state.customers.lock().map_err(|e| e.to_string())?;
    Ok(customers.visible())
}

#[tauri::command]
pub fn search_customers(
    state: State<'_, AppState>,
    query: String,
) -> Result<PageView<Customer>, String> {
    let mut customers = state.customers.lock().map_err(|e| e.to_string())?;
    customers.set_search_query(query);
    Ok(customers.visible())
}

#[tauri::command]
pub fn set_customers_page(
    state: State<'_, AppState>,
    page: usize,
) -> Result<PageView<Customer>, String> {
    let mut customers = state.customers.lock().map_err(|e| e.to_string())?;
    customers.query.set_page(page);
    Ok(customers.visible())
}

#[tauri::command]
pub fn create_customer(
    state: State<'_, AppState>,
    input: CreateCustomerInput,
) -> Result<Customer, String> {
    let mut customers = state.customers.lock().map_err(|e| e.to_string())?;

    let customer = Customer {
        id: customers.next_id(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        location: input.location,
        orders: 0,
        total_spent: 0.0,
        status: CustomerStatus::Active,
    };

    customers.add_customer(customer.clone());
    Ok(customer)
}

#[tauri::command]
pub fn update_customer(state: State<'_, AppState>, customer: Customer) -> Result<bool, String> {
    let mut customers = state.customers.lock().map_err(|e| e.to_string())?;
    let outcome = customers.update_customer(customer);
    if !outcome.applied() {
        log::debug!("update_customer: id not present, nothing changed");
    }
    Ok(outcome.applied())
}

#[tauri::command]
pub fn toggle_customer_status(state: State<'_, AppState>, id: u32) -> Result<bool, String> {
    let mut customers = state.customers.lock().map_err(|e| e.to_string())?;
    let outcome = customers.toggle_status(id);
    if !outcome.applied() {
        log::debug!("toggle_customer_status: id {} not present", id);
    }
    Ok(outcome.applied())
}
