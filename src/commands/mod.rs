//! Tauri command handlers for ShopDeck

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod data;
pub mod orders;
pub mod products;

// Re-export all commands
pub use auth::*;
pub use customers::*;
pub use dashboard::*;
pub use data::*;
pub use orders::*;
pub use products::*;
