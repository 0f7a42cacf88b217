//! # Cart Commands
//!
//! The UI-facing cart operations. Input is checked against the configured
//! quantity ceiling here; the store itself has none.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart Panel                                                             │
//! │                                                                         │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Shopping Bag                                           ✕     │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Centella Calming Sheet Mask     x3          $37.50           │    │
//! │  │  Water Glow Lip Tint             x1          $14.00           │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Subtotal                                    $51.50           │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  get_cart() → { lines: [...], itemCount: 4, subtotal: 5150, ... }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use glow_core::validation::validate_quantity;
use glow_core::{CartChange, CartSnapshot, CoreError};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SessionCart};

/// Result of a cart command: what changed plus the cart afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub change: CartChange,
    pub cart: CartSnapshot,
}

/// Gets the current cart contents with totals.
pub fn get_cart(cart: &SessionCart) -> CartSnapshot {
    debug!("get_cart command");
    cart.with_cart(|store| store.snapshot())
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases
/// - Product not in cart: appended as a new line
/// - Quantity defaults to 1 and must be between 1 and the configured maximum
/// - The resulting line may not exceed the maximum either
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &SessionCart,
    config: &ConfigState,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    validate_quantity(quantity, config.max_item_quantity)?;
    let product = catalog.catalog().require(product_id)?;

    cart.with_cart_mut(|store| {
        let current = store.state().line(product_id).map_or(0, |l| l.quantity);
        let requested = current.saturating_add(quantity);
        if requested > config.max_item_quantity {
            return Err(ApiError::from(CoreError::QuantityTooLarge {
                requested,
                max: config.max_item_quantity,
            }));
        }

        let change = store.add_item(product, quantity);
        Ok(CartResponse {
            change,
            cart: store.snapshot(),
        })
    })
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Quantity above the maximum: rejected
/// - Product not in cart: nothing happens (`Unchanged`)
pub fn update_cart_item(
    cart: &SessionCart,
    config: &ConfigState,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    if quantity > config.max_item_quantity {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: config.max_item_quantity,
        }
        .into());
    }

    Ok(cart.with_cart_mut(|store| CartResponse {
        change: store.update_quantity(product_id, quantity),
        cart: store.snapshot(),
    }))
}

/// Removes a line. Removing something not in the cart is not an error.
pub fn remove_from_cart(cart: &SessionCart, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_cart_mut(|store| CartResponse {
        change: store.remove_item(product_id),
        cart: store.snapshot(),
    })
}

/// Opens or closes the cart panel (the bag icon).
pub fn toggle_cart(cart: &SessionCart) -> CartResponse {
    debug!("toggle_cart command");

    cart.with_cart_mut(|store| CartResponse {
        change: store.toggle_cart(),
        cart: store.snapshot(),
    })
}

/// Closes the cart panel (the panel's close button or its backdrop).
pub fn close_cart(cart: &SessionCart) -> CartResponse {
    debug!("close_cart command");

    cart.with_cart_mut(|store| CartResponse {
        change: store.close_cart(),
        cart: store.snapshot(),
    })
}

/// Empties the cart.
pub fn clear_cart(cart: &SessionCart) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|store| CartResponse {
        change: store.clear(),
        cart: store.snapshot(),
    })
}
