//! # Commands Module
//!
//! Everything the UI layer can ask of the storefront.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog listing and lookup
//! ├── cart.rs     ◄─── Cart manipulation
//! └── nav.rs      ◄─── Routing and the mobile drawer
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &SessionCart) -> CartSnapshot
//!
//! // Needs catalog, cart and the configured quantity ceiling
//! fn add_to_cart(catalog: &CatalogState, cart: &SessionCart, config: &ConfigState, ...)
//! ```

pub mod cart;
pub mod nav;
pub mod product;
