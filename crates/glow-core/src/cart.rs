//! # Cart State
//!
//! The data held by the cart store: ordered lines plus panel visibility.
//!
//! ## Invariants
//! - At most one [`CartLine`] per product id (adding again increments)
//! - Every line has `quantity >= 1` (setting 0 or less removes the line)
//! - Lines keep the order in which products were first added
//! - `is_open` only changes through the visibility operations
//!
//! Mutation is `pub(crate)`: outside this crate the only way to change a
//! [`CartState`] is through [`crate::store::CartStore`], which also notifies
//! subscribers.
//!
//! ## Operation Table
//! ```text
//! ┌──────────────────────────────┬────────────────────────────────────────┐
//! │ operation                    │ effect                                 │
//! ├──────────────────────────────┼────────────────────────────────────────┤
//! │ add(p, n)        n >= 1      │ increment line, or append new line     │
//! │ add(p, n)        n <= 0      │ Unchanged                              │
//! │ remove(id)                   │ drop line, Unchanged if absent         │
//! │ set_quantity(id, n) n <= 0   │ same as remove(id)                     │
//! │ set_quantity(id, n) n >= 1   │ set exactly n, Unchanged if absent     │
//! │ toggle()                     │ closed <-> open                        │
//! └──────────────────────────────┴────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// A product in the cart together with how many of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Copy of the catalog record at the time it was added.
    pub product: Product,

    /// Always >= 1.
    pub quantity: i64,

    /// When this product was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Change
// =============================================================================

/// What a store operation did.
///
/// Store operations never fail; this is how callers learn whether their
/// request had an effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartChange {
    /// A new line was appended.
    Added { product_id: String, quantity: i64 },

    /// An existing line grew; `quantity` is the new total.
    Incremented { product_id: String, quantity: i64 },

    /// An existing line was set to exactly `quantity`.
    QuantitySet { product_id: String, quantity: i64 },

    Removed { product_id: String },

    /// Every line was dropped.
    Cleared { lines: usize },

    /// The cart panel opened or closed.
    Visibility { is_open: bool },

    /// Nothing changed (unknown id, non-positive add, same value).
    Unchanged,
}

impl CartChange {
    /// Whether the operation changed state (and so notified subscribers).
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Lines plus panel visibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    is_open: bool,
}

impl CartState {
    /// An empty, closed cart.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |count, l| count.saturating_add(l.quantity))
    }

    /// Sum of price × quantity across all lines, saturating like [`Money`].
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    // -------------------------------------------------------------------------
    // Mutation (store only)
    // -------------------------------------------------------------------------

    pub(crate) fn add(&mut self, product: &Product, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return CartChange::Unchanged;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return CartChange::Incremented {
                product_id: product.id.clone(),
                quantity: line.quantity,
            };
        }

        self.lines.push(CartLine::new(product, quantity));
        CartChange::Added {
            product_id: product.id.clone(),
            quantity,
        }
    }

    pub(crate) fn remove(&mut self, product_id: &str) -> CartChange {
        match self.lines.iter().position(|l| l.product.id == product_id) {
            Some(index) => {
                // `remove`, not `swap_remove`: line order is insertion order.
                self.lines.remove(index);
                CartChange::Removed {
                    product_id: product_id.to_string(),
                }
            }
            None => CartChange::Unchanged,
        }
    }

    pub(crate) fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) if line.quantity == quantity => CartChange::Unchanged,
            Some(line) => {
                line.quantity = quantity;
                CartChange::QuantitySet {
                    product_id: product_id.to_string(),
                    quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    pub(crate) fn clear(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }
        let lines = self.lines.len();
        self.lines.clear();
        CartChange::Cleared { lines }
    }

    pub(crate) fn toggle(&mut self) -> CartChange {
        self.is_open = !self.is_open;
        CartChange::Visibility {
            is_open: self.is_open,
        }
    }

    pub(crate) fn set_open(&mut self, open: bool) -> CartChange {
        if self.is_open == open {
            return CartChange::Unchanged;
        }
        self.toggle()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// One cart line flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
    /// RFC 3339 time the product first went into the bag.
    pub added_at: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        CartLineView {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            unit_price: line.product.price,
            quantity: line.quantity,
            line_total: line.line_total(),
            added_at: line.added_at.to_rfc3339(),
        }
    }
}

/// Owned, serializable view of the cart with derived totals filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<CartLineView>,
    pub item_count: i64,
    pub subtotal: Money,
    pub is_open: bool,
}

impl From<&CartState> for CartSnapshot {
    fn from(state: &CartState) -> Self {
        CartSnapshot {
            lines: state.lines.iter().map(CartLineView::from).collect(),
            item_count: state.item_count(),
            subtotal: state.subtotal(),
            is_open: state.is_open,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_cents(price_cents),
            "/img/test.jpg",
            Category::Skincare,
        )
    }

    #[test]
    fn test_new_cart_is_empty_and_closed() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = CartState::new();
        let product = test_product("a", 999);

        assert!(matches!(cart.add(&product, 2), CartChange::Added { quantity: 2, .. }));
        assert!(matches!(
            cart.add(&product, 3),
            CartChange::Incremented { quantity: 5, .. }
        ));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_non_positive_is_noop() {
        let mut cart = CartState::new();
        let product = test_product("a", 999);

        assert_eq!(cart.add(&product, 0), CartChange::Unchanged);
        assert_eq!(cart.add(&product, -3), CartChange::Unchanged);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = CartState::new();
        for id in ["c", "a", "b"] {
            cart.add(&test_product(id, 100), 1);
        }
        cart.add(&test_product("a", 100), 4);
        cart.remove("c");
        cart.add(&test_product("c", 100), 1);

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_set_quantity_is_not_additive() {
        let mut cart = CartState::new();
        cart.add(&test_product("a", 100), 4);

        assert!(cart.set_quantity("a", 2).is_change());
        assert_eq!(cart.line("a").map(|l| l.quantity), Some(2));

        assert_eq!(cart.set_quantity("a", 2), CartChange::Unchanged);
        assert_eq!(cart.set_quantity("missing", 7), CartChange::Unchanged);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = CartState::new();
        cart.add(&test_product("a", 100), 4);
        cart.add(&test_product("b", 100), 1);

        assert!(matches!(cart.set_quantity("a", 0), CartChange::Removed { .. }));
        assert!(matches!(cart.set_quantity("b", -2), CartChange::Removed { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_open_only_reports_real_flips() {
        let mut cart = CartState::new();
        assert_eq!(cart.set_open(false), CartChange::Unchanged);
        assert_eq!(cart.set_open(true), CartChange::Visibility { is_open: true });
        assert_eq!(cart.set_open(true), CartChange::Unchanged);
        assert_eq!(cart.toggle(), CartChange::Visibility { is_open: false });
    }

    #[test]
    fn test_clear_keeps_visibility() {
        let mut cart = CartState::new();
        cart.toggle();
        cart.add(&test_product("a", 100), 1);
        cart.add(&test_product("b", 100), 1);

        assert_eq!(cart.clear(), CartChange::Cleared { lines: 2 });
        assert_eq!(cart.clear(), CartChange::Unchanged);
        assert!(cart.is_open());
    }

    #[test]
    fn test_snapshot_totals() {
        let mut cart = CartState::new();
        cart.add(&test_product("a", 1250), 3);
        cart.add(&test_product("b", 500), 1);

        let snapshot = CartSnapshot::from(&cart);
        assert_eq!(snapshot.item_count, 4);
        assert_eq!(snapshot.subtotal, Money::from_cents(4250));
        assert_eq!(snapshot.lines[0].line_total, Money::from_cents(3750));
        assert!(!snapshot.is_open);
    }

    #[test]
    fn test_change_serializes_with_kind_tag() {
        let change = CartChange::Removed {
            product_id: "a".to_string(),
        };
        let value = serde_json::to_value(&change).unwrap();
        assert_eq!(value["kind"], "removed");
        assert_eq!(value["productId"], "a");

        let value = serde_json::to_value(CartChange::Visibility { is_open: true }).unwrap();
        assert_eq!(value["kind"], "visibility");
        assert_eq!(value["isOpen"], true);
    }

    #[test]
    fn test_added_at_survives_increment() {
        let mut cart = CartState::new();
        let product = test_product("a", 100);

        cart.add(&product, 1);
        let first_added = cart.line("a").map(|l| l.added_at);
        cart.add(&product, 2);
        cart.set_quantity("a", 7);

        assert_eq!(cart.line("a").map(|l| l.added_at), first_added);

        let snapshot = CartSnapshot::from(&cart);
        let parsed = DateTime::parse_from_rfc3339(&snapshot.lines[0].added_at).unwrap();
        assert_eq!(Some(parsed.with_timezone(&Utc)), first_added);
    }
}
