//! Order commands for the order management pages

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use crate::store::orders::{Order, OrderStatus};
use crate::store::view::PageView;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub customer: String,
    pub total: f64,
    pub items: u32,
}

#[tauri::command]
pub fn get_orders(state: State<'_, AppState>) -> Result<PageView<Order>, String> {
    let orders = state.orders.lock().map_err(|e| e.to_string())?;
    Ok(orders.visible())
}

#[tauri::command]
pub fn search_orders(
    state: State<'_, AppState>,
    query: String,
) -> Result<PageView<Order>, String> {
    let mut orders = state.orders.lock().map_err(|e| e.to_string())?;
    orders.set_search_query(query);
    Ok(orders.visible())
}

#[tauri::command]
pub fn set_order_status_filter(
    state: State<'_, AppState>,
    filter: String,
) -> Result<PageView<Order>, String> {
    let mut orders = state.orders.lock().map_err(|e| e.to_string())?;
    orders.set_status_filter(filter);
    Ok(orders.visible())
}

#[tauri::command]
pub fn set_orders_page(
    state: State<'_, AppState>,
    page: usize,
) -> Result<PageView<Order>, String> {
    let mut orders = state.orders.lock().map_err(|e| e.to_string())?;
    orders.query.set_page(page);
    Ok(orders.visible())
}

#[tauri::command]
pub fn create_order(state: State<'_, AppState>, input: CreateOrderInput) -> Result<Order, String> {
    let mut orders = state.orders.lock().map_err(|e| e.to_string())?;

    let order = Order {
        id: orders.next_id(),
        customer: input.customer,
        date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        total: input.total,
        status: OrderStatus::Pending,
        items: input.items,
    };

    orders.add_order(order.clone());
    Ok(order)
}

#[tauri::command]
pub fn update_order_status(
    state: State<'_, AppState>,
    id: String,
    status: OrderStatus,
) -> Result<bool, String> {
    let mut orders = state.orders.lock().map_err(|e| e.to_string())?;
    let outcome = orders.update_status(&id, status);
    if !outcome.applied() {
        log::debug!("update_order_status: order {} not present", id);
    }
    Ok(outcome.applied())
}
