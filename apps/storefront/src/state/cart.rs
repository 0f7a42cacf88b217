//! # Session Cart
//!
//! Shares the one [`CartStore`] of this session between the command layer
//! and the renderer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Cart Operations                              │
//! │                                                                         │
//! │  Shopper Action           Command                 Store Operation       │
//! │  ──────────────           ───────                 ───────────────       │
//! │                                                                         │
//! │  "Add to bag" ───────────► add_to_cart() ───────► add_item(p, n)        │
//! │                                                                         │
//! │  Quantity stepper ───────► update_cart_item() ──► update_quantity(id,n) │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ──► remove_item(id)       │
//! │                                                                         │
//! │  Bag icon ───────────────► toggle_cart() ───────► toggle_cart()         │
//! │                                                                         │
//! │  NOTE: Every call takes the lock for the duration of one operation      │
//! │        and never across an await point.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glow_core::{CartState, CartStore, Subscription};

/// Lock-protected handle to the session's cart store.
///
/// Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct SessionCart {
    store: Arc<Mutex<CartStore>>,
}

impl SessionCart {
    /// Creates an empty session cart.
    pub fn new() -> Self {
        SessionCart {
            store: Arc::new(Mutex::new(CartStore::new())),
        }
    }

    /// Runs `f` with read access to the store.
    ///
    /// ```rust
    /// use glow_storefront::state::SessionCart;
    ///
    /// let cart = SessionCart::new();
    /// assert_eq!(cart.with_cart(|store| store.item_count()), 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        f(&self.lock())
    }

    /// Runs `f` with write access to the store.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        f(&mut self.lock())
    }

    /// Registers a callback on the underlying store.
    ///
    /// The callback runs while the store lock is held; it must not call
    /// back into this `SessionCart`.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        self.lock().subscribe(callback)
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        // Store operations cannot panic halfway through a mutation, so the
        // state behind a poisoned lock is still consistent.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
