//! # glow-core: Pure Storefront Logic for GLOW
//!
//! This crate holds everything the GLOW storefront decides, as plain Rust
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        GLOW Storefront                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              UI layer (apps/storefront renderer)                │   │
//! │  │    Nav bar ──► Product grid ──► Cart panel ──► Footer           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / subscriptions               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ glow-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │   │  types   │ │  money   │ │ catalog  │ │  store   │ │ nav  │ │   │
//! │  │   │ Product  │ │  Money   │ │ Catalog  │ │CartStore │ │Route │ │   │
//! │  │   │ Category │ │          │ │          │ │CartState │ │      │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Category
//! - [`money`] - Integer money (cents)
//! - [`catalog`] - Read-only product collection
//! - [`cart`] - Cart lines, state, snapshots
//! - [`store`] - The cart store and its subscriptions
//! - [`nav`] - Routes, links, mobile drawer state
//! - [`validation`] - Input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use glow_core::{CartStore, Catalog, Money};
//!
//! let catalog = Catalog::builtin();
//! let mask = catalog.get("glow-sheet-mask").unwrap();
//!
//! let mut store = CartStore::new();
//! store.add_item(mask, 3);
//!
//! assert_eq!(store.item_count(), 3);
//! assert_eq!(store.subtotal(), Money::from_major_minor(37, 50));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod nav;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartChange, CartLine, CartLineView, CartSnapshot, CartState};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use nav::{NavState, Route};
pub use store::{CartStore, Subscription};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default ceiling on a single line's quantity in the UI.
///
/// The store itself has no ceiling; the storefront's command layer applies
/// this (or the configured override) before calling it.
pub const MAX_ITEM_QUANTITY: i64 = 99;
