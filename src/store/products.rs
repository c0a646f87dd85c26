//! Product slice: catalog records with a category filter on top of search.

use serde::{Deserialize, Serialize};

use super::view::{visible_slice, ListQuery, PageView, Searchable};
use super::MutationOutcome;

/// Category filter value that disables category narrowing.
pub const ALL_CATEGORIES: &str = "All";

/// Stock level below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    pub fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            ProductStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            ProductStatus::LowStock
        } else {
            ProductStatus::InStock
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub image: String,
}

impl Searchable for Product {
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub query: ListQuery,
    pub selected_category: String,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            items: seed_products(),
            query: ListQuery::default(),
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ProductsState {
    pub fn set_search_query(&mut self, search: String) {
        self.query.set_search(search);
    }

    /// Narrowing by category also resets pagination.
    pub fn set_selected_category(&mut self, category: String) {
        self.selected_category = category;
        self.query.page = 1;
    }

    /// New products go to the end of the catalog.
    pub fn add_product(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn update_product(&mut self, product: Product) -> MutationOutcome {
        match self.items.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                MutationOutcome::Updated
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn delete_product(&mut self, id: u32) -> MutationOutcome {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        if self.items.len() < before {
            MutationOutcome::Updated
        } else {
            MutationOutcome::NotFound
        }
    }

    pub fn next_id(&self) -> u32 {
        self.items.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    pub fn visible(&self) -> PageView<Product> {
        if self.selected_category == ALL_CATEGORIES {
            visible_slice(&self.items, &self.query)
        } else {
            let narrowed: Vec<Product> = self
                .items
                .iter()
                .filter(|p| p.category == self.selected_category)
                .cloned()
                .collect();
            visible_slice(&narrowed, &self.query)
        }
    }
}

fn seed_products() -> Vec<Product> {
    let rows = [
        (1, "Wireless Headphones", "Electronics", 99.99, 45, ProductStatus::InStock, "🎧"),
        (2, "Smart Watch", "Electronics", 199.99, 12, ProductStatus::LowStock, "⌚"),
        (3, "Laptop Stand", "Accessories", 49.99, 0, ProductStatus::OutOfStock, "💻"),
        (4, "USB-C Cable", "Accessories", 19.99, 156, ProductStatus::InStock, "🔌"),
        (5, "Mechanical Keyboard", "Electronics", 149.99, 34, ProductStatus::InStock, "⌨️"),
        (6, "Wireless Mouse", "Electronics", 39.99, 8, ProductStatus::LowStock, "🖱️"),
        (7, "Phone Case", "Accessories", 24.99, 89, ProductStatus::InStock, "📱"),
        (8, "Screen Protector", "Accessories", 14.99, 234, ProductStatus::InStock, "🛡️"),
    ];

    rows.into_iter()
        .map(|(id, name, category, price, stock, status, image)| Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            status,
            image: image.to_string(),
        })
        .collect()
}
