//! # Catalog
//!
//! The read-only product collection behind the storefront grid.
//!
//! ## Lifecycle
//! ```text
//! startup ──► Catalog::builtin()            (bundled best sellers)
//!        └──► Catalog::from_json(&contents) (GLOW_CATALOG_PATH, read by the app)
//!                     │
//!                     ▼
//!              validate every record, reject duplicate ids
//!                     │
//!                     ▼
//!              shared read-only for the rest of the session
//! ```
//!
//! Nothing mutates a catalog after construction.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Category, Product};
use crate::validation::validate_product;

/// Static, ordered product collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from records, validating each and rejecting
    /// duplicate ids. Order is preserved; it is the grid order.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    ///
    /// ```rust
    /// use glow_core::catalog::Catalog;
    ///
    /// let json = r#"[{"id":"p1","name":"Toner","price":1800,
    ///                 "image":"/img/p1.jpg","category":"skincare"}]"#;
    /// let catalog = Catalog::from_json(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::from_products(products)
    }

    /// The bundled best-seller list shown on the home page.
    pub fn builtin() -> Self {
        // Bundled data is known-good; no validation pass needed.
        Catalog {
            products: vec![
                Product::new(
                    "glow-snail-essence",
                    "Snail Mucin Power Essence",
                    Money::from_major_minor(25, 0),
                    "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?auto=format&fit=crop&w=800&q=80",
                    Category::Skincare,
                ),
                Product::new(
                    "glow-rice-toner",
                    "Rice Water Brightening Toner",
                    Money::from_major_minor(18, 0),
                    "https://images.unsplash.com/photo-1608248543803-ba4f8c70ae0b?auto=format&fit=crop&w=800&q=80",
                    Category::Skincare,
                ),
                Product::new(
                    "glow-sheet-mask",
                    "Centella Calming Sheet Mask",
                    Money::from_major_minor(12, 50),
                    "https://images.unsplash.com/photo-1596755389378-c31d21fd1273?auto=format&fit=crop&w=800&q=80",
                    Category::Skincare,
                ),
                Product::new(
                    "glow-sun-serum",
                    "Airy Sun Serum SPF 50+",
                    Money::from_major_minor(22, 0),
                    "https://images.unsplash.com/photo-1556228720-195a672e8a03?auto=format&fit=crop&w=800&q=80",
                    Category::Skincare,
                ),
                Product::new(
                    "glow-cushion",
                    "Dewy Cushion Foundation",
                    Money::from_major_minor(32, 0),
                    "https://images.unsplash.com/photo-1631730486572-226d1f3c2b89?auto=format&fit=crop&w=800&q=80",
                    Category::Makeup,
                ),
                Product::new(
                    "glow-lip-tint",
                    "Water Glow Lip Tint",
                    Money::from_major_minor(14, 0),
                    "https://images.unsplash.com/photo-1586495777744-4413f21062fa?auto=format&fit=crop&w=800&q=80",
                    Category::Makeup,
                ),
                Product::new(
                    "glow-starter-set",
                    "Glass Skin Starter Set",
                    Money::from_major_minor(58, 0),
                    "https://images.unsplash.com/photo-1612817288484-6f916006741a?auto=format&fit=crop&w=800&q=80",
                    Category::Sets,
                ),
                Product::new(
                    "glow-travel-set",
                    "Five Step Travel Kit",
                    Money::from_major_minor(39, 99),
                    "https://images.unsplash.com/photo-1570194065650-d99fb4bedf0a?auto=format&fit=crop&w=800&q=80",
                    Category::Sets,
                ),
            ],
        }
    }

    /// All products, in grid order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Products in one category, in grid order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents), "/img/p.jpg", Category::Makeup)
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert!(!builtin.is_empty());

        let rebuilt = Catalog::from_products(builtin.products().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            assert!(catalog.by_category(category).next().is_some(), "{category} is empty");
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::from_products(vec![product("a", 100), product("b", 200)]).unwrap();

        assert_eq!(catalog.get("b").map(|p| p.price.cents()), Some(200));
        assert!(catalog.get("zzz").is_none());
        assert!(matches!(
            catalog.require("zzz"),
            Err(CoreError::ProductNotFound(id)) if id == "zzz"
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::from_products(vec![product("a", 100), product("a", 300)]);
        assert!(matches!(result, Err(CoreError::DuplicateProduct(id)) if id == "a"));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Catalog::from_products(vec![product("a", -5)]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "set-1", "name": "Hydration Duo", "price": 4200,
             "image": "https://img.example.com/duo.jpg", "category": "sets"},
            {"id": "mk-1", "name": "Brow Pencil", "price": 900,
             "image": "/img/brow.jpg", "category": "makeup"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].id, "set-1");
        assert_eq!(catalog.by_category(Category::Makeup).count(), 1);
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        let json = r#"[{"id": "x", "name": "X", "price": 1, "image": "/x", "category": "haircare"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CoreError::InvalidCatalog(_))));
    }
}
