//! # Navigation
//!
//! Route table and navigation shell state for the storefront.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ ☰  GLOW        Skincare  Makeup  Sets  About          🔍  👤  👜 3 │
//! └──────────────────────────────────────────────────────────────────────┘
//!   │                  │                                          │
//!   │ mobile drawer    │ NAV_LINKS → Route                        │ cart badge
//!   ▼                  ▼                                          ▼
//! NavState.toggle_mobile_menu()   NavState.navigate()      CartStore.item_count()
//! ```
//!
//! Following a link from the open drawer also closes the drawer.

use serde::Serialize;
use std::fmt;

use crate::types::Category;

// =============================================================================
// Route
// =============================================================================

/// A page of the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "value", rename_all = "camelCase")]
pub enum Route {
    /// Hero banner plus the best-seller grid.
    #[default]
    Home,
    /// Per-category placeholder page.
    Category(Category),
    About,
    /// Anything else; keeps the requested path for the not-found page.
    NotFound(String),
}

impl Route {
    /// Resolves a path such as `/skincare` or `makeup/`.
    ///
    /// Query strings and fragments are ignored; matching is case-insensitive.
    ///
    /// ```rust
    /// use glow_core::nav::Route;
    /// use glow_core::types::Category;
    ///
    /// assert_eq!(Route::parse("/"), Route::Home);
    /// assert_eq!(Route::parse("/Sets?ref=nav"), Route::Category(Category::Sets));
    /// assert!(matches!(Route::parse("/careers"), Route::NotFound(_)));
    /// ```
    pub fn parse(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('/');

        if path.is_empty() {
            return Route::Home;
        }
        if path.eq_ignore_ascii_case("about") {
            return Route::About;
        }
        match Category::from_slug(path) {
            Some(category) => Route::Category(category),
            None => Route::NotFound(format!("/{}", path)),
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(category) => format!("/{}", category.slug()),
            Route::About => "/about".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Page heading.
    pub fn title(&self) -> String {
        match self {
            Route::Home => "Best Sellers".to_string(),
            Route::Category(category) => format!("{} Page", category.label()),
            Route::About => "About Page".to_string(),
            Route::NotFound(_) => "Page Not Found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// =============================================================================
// Links
// =============================================================================

/// A labelled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const fn link(label: &'static str, path: &'static str) -> NavLink {
    NavLink { label, path }
}

/// Primary navigation, shared by the desktop bar and the mobile drawer.
pub const NAV_LINKS: [NavLink; 4] = [
    link("Skincare", "/skincare"),
    link("Makeup", "/makeup"),
    link("Sets", "/sets"),
    link("About", "/about"),
];

/// A titled column of footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Footer columns. Several targets have no page yet and resolve to
/// [`Route::NotFound`].
pub const FOOTER_GROUPS: [FooterGroup; 3] = [
    FooterGroup {
        title: "Shop",
        links: &[
            link("New Arrivals", "/"),
            link("Best Sellers", "/"),
            link("Skincare", "/skincare"),
            link("Makeup", "/makeup"),
        ],
    },
    FooterGroup {
        title: "Support",
        links: &[
            link("Contact", "/contact"),
            link("Shipping", "/shipping"),
            link("Returns", "/returns"),
            link("FAQ", "/faq"),
        ],
    },
    FooterGroup {
        title: "Company",
        links: &[
            link("About", "/about"),
            link("Blog", "/blog"),
            link("Careers", "/careers"),
        ],
    },
];

// =============================================================================
// Navigation State
// =============================================================================

/// Current page plus whether the mobile drawer is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    current: Route,
    mobile_menu_open: bool,
}

impl NavState {
    /// Starts on the home page with the drawer closed.
    pub fn new() -> Self {
        NavState::default()
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Opens or closes the drawer. Returns the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Goes to `path`. Clicking any link (drawer or not) dismisses the
    /// drawer, matching the drawer's own link handlers.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.current = Route::parse(path);
        self.mobile_menu_open = false;
        &self.current
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/skincare"), Route::Category(Category::Skincare));
        assert_eq!(Route::parse("makeup/"), Route::Category(Category::Makeup));
        assert_eq!(Route::parse("/sets#top"), Route::Category(Category::Sets));
        assert_eq!(Route::parse("/ABOUT"), Route::About);
    }

    #[test]
    fn test_parse_unknown_route_keeps_path() {
        assert_eq!(Route::parse("/faq/"), Route::NotFound("/faq".to_string()));
        assert_eq!(Route::parse("/faq").path(), "/faq");
    }

    #[test]
    fn test_nav_links_resolve_to_pages() {
        for link in NAV_LINKS {
            let route = Route::parse(link.path);
            assert!(!matches!(route, Route::NotFound(_)), "{} is not routed", link.path);
            assert_eq!(route.path(), link.path);
        }
    }

    #[test]
    fn test_footer_has_unrouted_links() {
        let unrouted: Vec<&str> = FOOTER_GROUPS
            .iter()
            .flat_map(|g| g.links.iter())
            .filter(|l| matches!(Route::parse(l.path), Route::NotFound(_)))
            .map(|l| l.path)
            .collect();
        assert!(unrouted.contains(&"/contact"));
        assert!(!unrouted.contains(&"/skincare"));
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Home.title(), "Best Sellers");
        assert_eq!(Route::Category(Category::Makeup).title(), "Makeup Page");
        assert_eq!(Route::About.title(), "About Page");
    }

    #[test]
    fn test_drawer_closes_on_navigation() {
        let mut nav = NavState::new();
        assert!(!nav.is_mobile_menu_open());

        assert!(nav.toggle_mobile_menu());
        nav.navigate("/sets");

        assert!(!nav.is_mobile_menu_open());
        assert_eq!(nav.current(), &Route::Category(Category::Sets));
    }

    #[test]
    fn test_toggle_mobile_menu_twice_restores() {
        let mut nav = NavState::new();
        nav.toggle_mobile_menu();
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());
    }
}
