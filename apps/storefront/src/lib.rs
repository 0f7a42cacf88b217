//! # glow-storefront: GLOW in the Terminal
//!
//! Wires configuration, the catalog, the session cart store and navigation
//! together, and drives them from a line-oriented shell.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Startup                                   │
//! │                                                                         │
//! │  1. init_tracing()           RUST_LOG or the default filter, to stderr  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. ConfigState::from_env()  GLOW_* variables over defaults             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. CatalogState::load()     bundled catalog or GLOW_CATALOG_PATH       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. Storefront::new()        session cart + renderer subscription       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  5. shell::run_session()     stdin actions ──► stdout frames            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glow_core::Subscription;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::commands::{cart, nav, product};
use crate::error::{ApiError, AppError};
use crate::shell::{Action, Reply};
use crate::state::{CatalogState, ConfigState, SessionCart, SessionNav};
use crate::view::PageView;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,glow_storefront=info";

// =============================================================================
// Storefront
// =============================================================================

/// One shopper's session: shared state plus the renderer's cart
/// subscription.
pub struct Storefront {
    config: ConfigState,
    catalog: CatalogState,
    cart: SessionCart,
    nav: SessionNav,

    /// Set by the cart subscription, cleared when a frame is drawn.
    dirty: Arc<AtomicBool>,

    _cart_updates: Subscription,
}

impl Storefront {
    /// Creates a session and subscribes the renderer to the cart store.
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        let cart = SessionCart::new();
        let dirty = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&dirty);
        let cart_updates = cart.subscribe(move |_| flag.store(true, Ordering::Release));

        Storefront {
            config,
            catalog,
            cart,
            nav: SessionNav::new(),
            dirty,
            _cart_updates: cart_updates,
        }
    }

    /// Builds a session from `GLOW_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let config = ConfigState::from_env()?;
        let catalog = CatalogState::load(&config)?;
        let storefront = Storefront::new(config, catalog);
        info!(
            session = %storefront.session_id(),
            store = %storefront.config.store_name,
            products = storefront.catalog.catalog().len(),
            "storefront ready"
        );
        Ok(storefront)
    }

    /// Id of this session's cart store, as it appears in log fields.
    pub fn session_id(&self) -> Uuid {
        self.cart.with_cart(|store| store.session_id())
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn cart(&self) -> &SessionCart {
        &self.cart
    }

    pub fn nav(&self) -> &SessionNav {
        &self.nav
    }

    /// Returns whether the cart changed since the last call, and resets.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Draws the current frame.
    pub fn render(&self) -> String {
        let cart = cart::get_cart(&self.cart);
        self.nav.with_nav(|nav| {
            PageView {
                config: &self.config,
                catalog: self.catalog.catalog(),
                nav,
                cart: &cart,
            }
            .to_string()
        })
    }

    /// Runs one shopper action.
    ///
    /// Cart actions reply with [`Reply::Nothing`]: the page is redrawn off
    /// the store's change notification instead, so no-op actions leave the
    /// screen alone.
    pub fn dispatch(&self, action: Action) -> Result<Reply, ApiError> {
        let reply = match action {
            Action::Add {
                product_id,
                quantity,
            } => {
                cart::add_to_cart(&self.catalog, &self.cart, &self.config, &product_id, quantity)?;
                Reply::Nothing
            }
            Action::Remove { product_id } => {
                cart::remove_from_cart(&self.cart, &product_id);
                Reply::Nothing
            }
            Action::SetQuantity {
                product_id,
                quantity,
            } => {
                cart::update_cart_item(&self.cart, &self.config, &product_id, quantity)?;
                Reply::Nothing
            }
            Action::ToggleCart => {
                cart::toggle_cart(&self.cart);
                Reply::Nothing
            }
            Action::CloseCart => {
                cart::close_cart(&self.cart);
                Reply::Nothing
            }
            Action::ClearCart => {
                cart::clear_cart(&self.cart);
                Reply::Nothing
            }
            Action::Go { path } => {
                nav::navigate(&self.nav, &path);
                Reply::Page
            }
            Action::ToggleMenu => {
                nav::toggle_mobile_menu(&self.nav);
                Reply::Page
            }
            Action::Products { category } => {
                let products = product::list_products(&self.catalog, category.as_deref())?;
                let mut text = String::new();
                for p in &products {
                    let _ = writeln!(
                        text,
                        "{:<20} {:<32} {:>10}",
                        p.id,
                        p.name,
                        self.config.format_money(p.price)
                    );
                }
                if products.is_empty() {
                    text.push_str("No products yet.\n");
                }
                Reply::Text(text)
            }
            Action::Product { product_id } => {
                let p = product::get_product(&self.catalog, &product_id)?;
                let mut text = String::new();
                let _ = writeln!(text, "{}", p.name);
                let _ = writeln!(text, "  id        {}", p.id);
                let _ = writeln!(text, "  category  {}", p.category.label());
                let _ = writeln!(text, "  price     {}", self.config.format_money(p.price));
                let _ = writeln!(text, "  image     {}", p.image);
                Reply::Text(text)
            }
            Action::Show { json: false } => Reply::Page,
            Action::Show { json: true } => {
                let snapshot = cart::get_cart(&self.cart);
                let body = serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| ApiError::internal(format!("could not encode cart: {}", e)))?;
                Reply::Text(body)
            }
            Action::Help => Reply::Text(shell::HELP.to_string()),
            Action::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with rendered frames.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the storefront on stdin/stdout until the shopper quits.
pub async fn run() -> Result<(), AppError> {
    let storefront = Storefront::from_env()?;
    info!("starting session");

    let input = BufReader::new(tokio::io::stdin());
    shell::run_session(&storefront, input, tokio::io::stdout()).await
}
