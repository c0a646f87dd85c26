//! Dashboard commands: the stat cards and revenue chart on the home page

use std::collections::BTreeMap;

use serde::Serialize;
use tauri::State;

use crate::state::AppState;
use crate::store::orders::{Order, OrderStatus};

/// How many orders the "recent orders" card shows.
const RECENT_ORDERS: usize = 5;

#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_orders: usize,
    pub total_products: usize,
    pub total_customers: usize,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenuePoint {
    pub date: String,
    pub revenue: f64,
}

#[tauri::command]
pub fn get_dashboard_stats(state: State<'_, AppState>) -> Result<DashboardStats, String> {
    let orders = state.orders.lock().map_err(|e| e.to_string())?;
    let products = state.products.lock().map_err(|e| e.to_string())?;
    let customers = state.customers.lock().map_err(|e| e.to_string())?;

    // Cancelled orders do not count toward revenue.
    let total_revenue = orders
        .items
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total)
        .sum();

    Ok(DashboardStats {
        total_revenue,
        total_orders: orders.items.len(),
        total_products: products.items.len(),
        total_customers: customers.items.len(),
        // the order book is newest-first, so the head is the recent set
        recent_orders: orders.items.iter().take(RECENT_ORDERS).cloned().collect(),
    })
}

/// Revenue per day for the area chart, oldest date first.
#[tauri::command]
pub fn get_revenue_series(state: State<'_, AppState>) -> Result<Vec<RevenuePoint>, String> {
    let orders = state.orders.lock().map_err(|e| e.to_string())?;

    let mut by_date: BTreeMap<String, f64> = BTreeMap::new();
    for order in orders
        .items
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
    {
        *by_date.entry(order.date.clone()).or_insert(0.0) += order.total;
    }

    Ok(by_date
        .into_iter()
        .map(|(date, revenue)| RevenuePoint { date, revenue })
        .collect())
}
