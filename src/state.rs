//! Application state management

use std::sync::Mutex;

use crate::session::Session;
use crate::store::customers::CustomersState;
use crate::store::data::DataState;
use crate::store::orders::OrdersState;
use crate::store::products::ProductsState;

/// Application state shared across Tauri commands.
///
/// One mutex per slice; commands lock exactly the slices they touch and
/// never hold a lock across an await point.
pub struct AppState {
    pub customers: Mutex<CustomersState>,
    pub products: Mutex<ProductsState>,
    pub orders: Mutex<OrdersState>,
    pub data: Mutex<DataState>,
    pub session: Mutex<Session>,
    /// Shared HTTP client for the remote posts feed
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(CustomersState::default()),
            products: Mutex::new(ProductsState::default()),
            orders: Mutex::new(OrdersState::default()),
            data: Mutex::new(DataState::default()),
            session: Mutex::new(Session::default()),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
