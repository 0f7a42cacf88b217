//! # Cart Store
//!
//! The single owner of [`CartState`]. Every change to the cart goes through
//! here, and every change is pushed to subscribers before the call returns.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Cart Store                                     │
//! │                                                                         │
//! │  UI action               Store operation          Subscribers           │
//! │  ─────────               ───────────────          ───────────           │
//! │                                                                         │
//! │  "Add to bag" ─────────► add_item(p, 1) ──┐                            │
//! │  qty stepper ──────────► update_quantity ─┤                            │
//! │  trash icon ───────────► remove_item ─────┼──► CartChange              │
//! │  bag icon / close ─────► toggle_cart ─────┘        │                    │
//! │                                                    │ is_change()?       │
//! │                                                    ▼                    │
//! │                                     nav badge, cart panel, ... (&state) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Subscriptions
//! [`CartStore::subscribe`] returns a [`Subscription`] guard. The store keeps
//! only a weak reference to the callback, so dropping the guard is all it
//! takes to unsubscribe; dead entries are pruned on the next notification.
//! Callbacks run in registration order.
//!
//! ## Usage
//! ```rust
//! use std::sync::atomic::{AtomicI64, Ordering};
//! use std::sync::Arc;
//!
//! use glow_core::{CartStore, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let mut store = CartStore::new();
//!
//! let badge = Arc::new(AtomicI64::new(0));
//! let seen = Arc::clone(&badge);
//! let _sub = store.subscribe(move |cart| seen.store(cart.item_count(), Ordering::SeqCst));
//!
//! store.add_item(&catalog.products()[0], 2);
//! assert_eq!(badge.load(Ordering::SeqCst), 2);
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::debug;
use uuid::Uuid;

use crate::cart::{CartChange, CartLine, CartSnapshot, CartState};
use crate::money::Money;
use crate::types::Product;

type Listener = dyn Fn(&CartState) + Send + Sync;

// =============================================================================
// Subscription
// =============================================================================

/// Keeps a store callback registered. Drop it (or call
/// [`Subscription::unsubscribe`]) to stop receiving updates.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _listener: Arc<Listener>,
}

impl Subscription {
    /// Explicit form of dropping the guard.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Session cart: state, operations and change notification.
pub struct CartStore {
    session_id: Uuid,
    state: CartState,
    listeners: Vec<Weak<Listener>>,
}

impl CartStore {
    /// Creates an empty, closed cart for a new session.
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, "cart store created");
        CartStore {
            session_id,
            state: CartState::new(),
            listeners: Vec::new(),
        }
    }

    /// Identifies this store in logs.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Sum of quantities across all lines. Zero for an empty cart.
    pub fn item_count(&self) -> i64 {
        self.state.item_count()
    }

    /// Sum of price × quantity across all lines, exact to the cent.
    pub fn subtotal(&self) -> Money {
        self.state.subtotal()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(&self.state)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Adds `quantity` of `product`.
    ///
    /// An existing line is incremented; otherwise a new line is appended.
    /// A quantity of zero or less does nothing and returns
    /// [`CartChange::Unchanged`]. There is no upper bound here: line
    /// quantities, [`CartStore::item_count`] and [`CartStore::subtotal`]
    /// saturate at `i64::MAX` rather than overflow.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CartChange {
        let change = self.state.add(product, quantity);
        self.commit(change)
    }

    /// `add_item(product, 1)`, what the "Add to bag" button does.
    pub fn add_one(&mut self, product: &Product) -> CartChange {
        self.add_item(product, 1)
    }

    /// Removes the line for `product_id`. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> CartChange {
        let change = self.state.remove(product_id);
        self.commit(change)
    }

    /// Sets the line's quantity to exactly `quantity`.
    ///
    /// Zero or less removes the line. A product not in the cart is left
    /// alone; this never adds.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CartChange {
        let change = self.state.set_quantity(product_id, quantity);
        self.commit(change)
    }

    /// Flips the cart panel between closed and open.
    pub fn toggle_cart(&mut self) -> CartChange {
        let change = self.state.toggle();
        self.commit(change)
    }

    pub fn open_cart(&mut self) -> CartChange {
        let change = self.state.set_open(true);
        self.commit(change)
    }

    pub fn close_cart(&mut self) -> CartChange {
        let change = self.state.set_open(false);
        self.commit(change)
    }

    /// Empties the cart. Panel visibility is untouched.
    pub fn clear(&mut self) -> CartChange {
        let change = self.state.clear();
        self.commit(change)
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers `callback` to run after every state change.
    ///
    /// The callback is not invoked for the current state; read
    /// [`CartStore::state`] for that.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let listener: Arc<Listener> = Arc::new(callback);
        self.listeners.push(Arc::downgrade(&listener));
        debug!(session = %self.session_id, "cart subscriber added");
        Subscription {
            _listener: listener,
        }
    }

    /// Number of subscriptions still alive.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.strong_count() > 0).count()
    }

    fn commit(&mut self, change: CartChange) -> CartChange {
        if change.is_change() {
            debug!(
                session = %self.session_id,
                ?change,
                item_count = self.state.item_count(),
                "cart updated"
            );
            self.notify();
        }
        change
    }

    fn notify(&mut self) {
        self.listeners.retain(|l| l.strong_count() > 0);
        for listener in &self.listeners {
            if let Some(callback) = listener.upgrade() {
                callback(&self.state);
            }
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_cents(price_cents),
            "/img/test.jpg",
            Category::Skincare,
        )
    }

    fn counter(store: &mut CartStore) -> (Arc<AtomicUsize>, Subscription) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let sub = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (calls, sub)
    }

    #[test]
    fn test_repeated_adds_collapse_into_one_line() {
        let mut store = CartStore::new();
        let product = test_product("p1", 1000);

        for qty in [1, 4, 2, 3] {
            store.add_item(&product, qty);
        }

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 10);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut store = CartStore::new();
        store.add_item(&test_product("a", 100), 1);
        store.add_item(&test_product("b", 100), 2);

        assert!(store.remove_item("a").is_change());
        let before = store.snapshot();

        assert_eq!(store.remove_item("a"), CartChange::Unchanged);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut store = CartStore::new();
        let product = test_product("a", 100);
        store.add_item(&product, 5);

        store.update_quantity("a", 2);
        assert_eq!(store.item_count(), 2);

        store.update_quantity("a", 0);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_update_quantity_never_adds() {
        let mut store = CartStore::new();
        assert_eq!(store.update_quantity("ghost", 3), CartChange::Unchanged);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_item_count_across_products() {
        let mut store = CartStore::new();
        store.add_item(&test_product("a", 100), 2);
        store.add_item(&test_product("b", 100), 3);

        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_subtotal_is_exact() {
        let mut store = CartStore::new();
        let serum = test_product("serum", 1250);

        store.add_item(&serum, 3);
        assert_eq!(store.subtotal(), Money::from_major_minor(37, 50));

        // Built up one at a time instead.
        let mut other = CartStore::new();
        for _ in 0..3 {
            other.add_one(&serum);
        }
        assert_eq!(other.subtotal(), Money::from_cents(3750));
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let _sub = store.subscribe(move |cart| {
            log.lock().unwrap().push((cart.item_count(), cart.subtotal()));
        });

        store.add_item(&test_product("a", 100), i64::MAX);
        store.add_item(&test_product("b", 100), 1);
        assert_eq!(store.item_count(), i64::MAX);

        let mut other = CartStore::new();
        let mask = test_product("mask", 1250);
        other.add_item(&mask, i64::MAX / 100);
        other.add_item(&mask, i64::MAX / 100);
        assert_eq!(other.subtotal(), Money::from_cents(i64::MAX));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].0, i64::MAX);
    }

    #[test]
    fn test_toggle_cart() {
        let mut store = CartStore::new();
        assert!(!store.is_open());

        store.toggle_cart();
        assert!(store.is_open());

        store.toggle_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_only_visibility_ops_change_visibility() {
        let mut store = CartStore::new();
        let product = test_product("a", 100);

        store.add_item(&product, 1);
        store.update_quantity("a", 3);
        store.remove_item("a");
        store.clear();
        assert!(!store.is_open());

        store.open_cart();
        store.add_item(&product, 1);
        store.clear();
        assert!(store.is_open());

        store.close_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_add_then_zero_scenario() {
        let mut store = CartStore::new();
        let p1 = test_product("p1", 1800);

        store.add_item(&p1, 1);
        store.add_item(&p1, 2);
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 3);
        assert_eq!(store.item_count(), 3);

        store.update_quantity("p1", 0);
        assert!(store.state().is_empty());
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_subscribers_see_new_state_synchronously() {
        let mut store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |cart| {
            sink.lock().unwrap().push((cart.item_count(), cart.is_open()));
        });

        store.add_item(&test_product("a", 100), 2);
        store.toggle_cart();
        store.update_quantity("a", 5);

        assert_eq!(*seen.lock().unwrap(), vec![(2, false), (2, true), (5, true)]);
    }

    #[test]
    fn test_noops_do_not_notify() {
        let mut store = CartStore::new();
        let (calls, _sub) = counter(&mut store);

        store.add_item(&test_product("a", 100), 0);
        store.remove_item("missing");
        store.update_quantity("missing", 2);
        store.close_cart();
        store.clear();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let mut store = CartStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let subs: Vec<Subscription> = ["nav", "panel", "footer"]
            .into_iter()
            .map(|name| {
                let order = Arc::clone(&order);
                store.subscribe(move |_| order.lock().unwrap().push(name))
            })
            .collect();

        store.toggle_cart();
        assert_eq!(*order.lock().unwrap(), ["nav", "panel", "footer"]);
        drop(subs);
    }

    #[test]
    fn test_dropped_subscription_stops_updates() {
        let mut store = CartStore::new();
        let (calls, sub) = counter(&mut store);
        let (other_calls, _other) = counter(&mut store);

        store.toggle_cart();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        sub.unsubscribe();
        store.toggle_cart();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(other_calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.subscriber_count(), 1);
    }
}
