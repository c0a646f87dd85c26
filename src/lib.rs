//! ShopDeck - E-commerce Admin Dashboard
//!
//! A Tauri application backing the storefront admin pages: dashboard
//! metrics, products, orders, customers, and the remote-backed data page.
//! All state is in-memory; closing the app discards everything except the
//! login stub, which the webview keeps on its side.

use serde::{Deserialize, Serialize};
use tauri::Manager;

pub mod commands;
pub mod fetch;
pub mod session;
pub mod state;
pub mod store;

use state::AppState;

/// Get application info
#[tauri::command]
fn get_app_info() -> AppInfo {
    AppInfo {
        name: "ShopDeck".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "E-commerce Admin Dashboard".to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Seed the in-memory store
            app.manage(AppState::new());
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            get_app_info,
            // Customer commands
            commands::get_customers,
            commands::search_customers,
            commands::set_customers_page,
            commands::create_customer,
            commands::update_customer,
            commands::toggle_customer_status,
            // Product commands
            commands::get_products,
            commands::search_products,
            commands::set_product_category,
            commands::set_products_page,
            commands::create_product,
            commands::update_product,
            commands::delete_product,
            // Order commands
            commands::get_orders,
            commands::search_orders,
            commands::set_order_status_filter,
            commands::set_orders_page,
            commands::create_order,
            commands::update_order_status,
            // Data page commands
            commands::get_posts,
            commands::fetch_posts,
            commands::search_posts,
            commands::set_posts_page,
            // Dashboard commands
            commands::get_dashboard_stats,
            commands::get_revenue_series,
            // Auth stub commands
            commands::login,
            commands::logout,
            commands::get_session,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
