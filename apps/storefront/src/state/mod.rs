//! # State Module
//!
//! Session state for the storefront shell.
//!
//! ## Why Multiple State Types?
//! Each command takes only the state it needs: cart commands never see the
//! navigation state, product listing never touches the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ ConfigState  │ │ CatalogState │ │ SessionCart  │ │ SessionNav   │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │ store name   │ │ Arc<Catalog> │ │ Arc<Mutex<   │ │ Mutex<       │   │
//! │  │ currency     │ │              │ │  CartStore>> │ │  NavState>   │   │
//! │  │ max quantity │ │              │ │              │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ConfigState, CatalogState: read-only after startup                    │
//! │  SessionCart, SessionNav:   locked per operation                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod nav;

pub use cart::SessionCart;
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use nav::SessionNav;
