//! # Product Commands
//!
//! Read-only access to the catalog for the product grid.

use glow_core::{Category, Product, ValidationError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Lists products in grid order, optionally for a single category slug.
pub fn list_products(
    catalog: &CatalogState,
    category: Option<&str>,
) -> Result<Vec<Product>, ApiError> {
    debug!(?category, "list_products command");

    let products = match category {
        None => catalog.catalog().products().to_vec(),
        Some(slug) => {
            let category = Category::from_slug(slug).ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.slug().to_string()).collect(),
            })?;
            catalog.catalog().by_category(category).cloned().collect()
        }
    };

    Ok(products)
}

/// Looks up one product by id.
pub fn get_product(catalog: &CatalogState, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.catalog().require(product_id)?.clone())
}
