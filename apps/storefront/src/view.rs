//! # View
//!
//! Renders the storefront as plain text: nav bar, mobile drawer, page body,
//! cart panel and footer. Pure functions of state; nothing here mutates.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ NavBar        brand, links, bag badge    │
//! │ MobileDrawer  only while open            │
//! │ Page          home / category / about    │
//! │ CartPanel     only while the cart is open│
//! │ Footer        link groups, newsletter    │
//! └──────────────────────────────────────────┘
//! ```

use std::fmt;

use glow_core::nav::{FOOTER_GROUPS, NAV_LINKS};
use glow_core::{CartSnapshot, Catalog, NavState, Product, Route};

use crate::state::ConfigState;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Everything needed to draw one frame.
pub struct PageView<'a> {
    pub config: &'a ConfigState,
    pub catalog: &'a Catalog,
    pub nav: &'a NavState,
    pub cart: &'a CartSnapshot,
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nav_bar(f, self.config, self.cart)?;
        if self.nav.is_mobile_menu_open() {
            write_mobile_drawer(f, self.config)?;
        }
        write_page(f, self.config, self.catalog, self.nav.current())?;
        if self.cart.is_open {
            write_cart_panel(f, self.config, self.cart)?;
        }
        write_footer(f)
    }
}

fn write_nav_bar(f: &mut fmt::Formatter<'_>, config: &ConfigState, cart: &CartSnapshot) -> fmt::Result {
    let links: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    let bag = if cart.item_count > 0 {
        format!("[bag {}]", cart.item_count)
    } else {
        "[bag]".to_string()
    };

    writeln!(f, "{}", RULE)?;
    writeln!(
        f,
        " ☰  {}    {}    [search] [account] {}",
        config.store_name,
        links.join("  "),
        bag
    )?;
    writeln!(f, "{}", RULE)
}

fn write_mobile_drawer(f: &mut fmt::Formatter<'_>, config: &ConfigState) -> fmt::Result {
    writeln!(f, " ┌ {} ─────────────── ✕", config.store_name)?;
    for link in NAV_LINKS {
        writeln!(f, " │ {:<12} {}", link.label, link.path)?;
    }
    writeln!(f, " └──────────────────────")
}

fn write_page(
    f: &mut fmt::Formatter<'_>,
    config: &ConfigState,
    catalog: &Catalog,
    route: &Route,
) -> fmt::Result {
    writeln!(f)?;
    match route {
        Route::Home => {
            writeln!(f, " Discover Korean Beauty")?;
            writeln!(
                f,
                " Curated selection of premium K-beauty products for your skincare routine"
            )?;
            writeln!(f, " [Shop Now]")?;
            writeln!(f)?;
            writeln!(f, " {}", route.title())?;
            write_grid(f, config, catalog.products().iter())?;
        }
        Route::Category(category) => {
            writeln!(f, " {}", route.title())?;
            write_grid(f, config, catalog.by_category(*category))?;
        }
        Route::About => {
            writeln!(f, " {}", route.title())?;
        }
        Route::NotFound(path) => {
            writeln!(f, " {}: {}", route.title(), path)?;
        }
    }
    writeln!(f)
}

fn write_grid<'p>(
    f: &mut fmt::Formatter<'_>,
    config: &ConfigState,
    products: impl Iterator<Item = &'p Product>,
) -> fmt::Result {
    let mut any = false;
    for product in products {
        any = true;
        writeln!(
            f,
            "   {:<28} {:>10}   {:<10} ({})",
            product.name,
            config.format_money(product.price),
            product.category.label(),
            product.id
        )?;
    }
    if !any {
        writeln!(f, "   No products yet.")?;
    }
    Ok(())
}

fn write_cart_panel(f: &mut fmt::Formatter<'_>, config: &ConfigState, cart: &CartSnapshot) -> fmt::Result {
    writeln!(f, " ┌ Shopping Bag ({}) ─────────────────────── ✕", cart.item_count)?;
    if cart.lines.is_empty() {
        writeln!(f, " │ Your bag is empty")?;
    }
    for line in &cart.lines {
        writeln!(
            f,
            " │ {:<28} x{:<3} {:>10}",
            line.name,
            line.quantity,
            config.format_money(line.line_total)
        )?;
    }
    writeln!(f, " │")?;
    writeln!(f, " │ {:<33}{:>10}", "Subtotal", config.format_money(cart.subtotal))?;
    writeln!(f, " └──────────────────────────────────────────────")
}

fn write_footer(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", RULE)?;
    for group in FOOTER_GROUPS {
        let labels: Vec<&str> = group.links.iter().map(|l| l.label).collect();
        writeln!(f, " {:<8} {}", group.title.to_uppercase(), labels.join(" · "))?;
    }
    writeln!(
        f,
        " NEWSLETTER Subscribe to get special offers, free giveaways, and updates."
    )?;
    writeln!(f, "{}", RULE)
}
