//! Product commands for the catalog pages

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::state::AppState;
use crate::store::products::{Product, ProductStatus};
use crate::store::view::PageView;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub image: Option<String>,
}

#[tauri::command]
pub fn get_products(state: State<'_, AppState>) -> Result<PageView<Product>, String> {
    let products = state.products.lock().map_err(|e| e.to_string())?;
    Ok(products.visible())
}

#[tauri::command]
pub fn search_products(
    state: State<'_, AppState>,
    query: String,
) -> Result<PageView<Product>, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;
    products.set_search_query(query);
    Ok(products.visible())
}

#[tauri::command]
pub fn set_product_category(
    state: State<'_, AppState>,
    category: String,
) -> Result<PageView<Product>, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;
    products.set_selected_category(category);
    Ok(products.visible())
}

#[tauri::command]
pub fn set_products_page(
    state: State<'_, AppState>,
    page: usize,
) -> Result<PageView<Product>, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;
    products.query.set_page(page);
    Ok(products.visible())
}

#[tauri::command]
pub fn create_product(
    state: State<'_, AppState>,
    input: CreateProductInput,
) -> Result<Product, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;

    let product = Product {
        id: products.next_id(),
        name: input.name,
        category: input.category,
        price: input.price,
        stock: input.stock,
        status: ProductStatus::from_stock(input.stock),
        image: input.image.unwrap_or_else(|| "📦".to_string()),
    };

    products.add_product(product.clone());
    Ok(product)
}

#[tauri::command]
pub fn update_product(state: State<'_, AppState>, product: Product) -> Result<bool, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;
    let outcome = products.update_product(product);
    if !outcome.applied() {
        log::debug!("update_product: id not present, nothing changed");
    }
    Ok(outcome.applied())
}

#[tauri::command]
pub fn delete_product(state: State<'_, AppState>, id: u32) -> Result<bool, String> {
    let mut products = state.products.lock().map_err(|e| e.to_string())?;
    let outcome = products.delete_product(id);
    if !outcome.applied() {
        log::debug!("delete_product: id {} not present", id);
    }
    Ok(outcome.applied())
}
