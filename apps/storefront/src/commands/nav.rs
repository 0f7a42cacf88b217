//! # Navigation Commands
//!
//! Link clicks and the mobile menu button.

use glow_core::Route;
use serde::Serialize;
use tracing::debug;

use crate::state::SessionNav;

/// Navigation state after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavResponse {
    pub route: Route,
    pub mobile_menu_open: bool,
}

/// Follows a link. Unknown paths land on the not-found page; this never
/// fails. The mobile drawer closes.
pub fn navigate(nav: &SessionNav, path: &str) -> NavResponse {
    debug!(path = %path, "navigate command");

    nav.with_nav_mut(|state| {
        let route = state.navigate(path).clone();
        NavResponse {
            route,
            mobile_menu_open: state.is_mobile_menu_open(),
        }
    })
}

/// Hamburger / close button on the mobile drawer.
pub fn toggle_mobile_menu(nav: &SessionNav) -> NavResponse {
    debug!("toggle_mobile_menu command");

    nav.with_nav_mut(|state| {
        let mobile_menu_open = state.toggle_mobile_menu();
        NavResponse {
            route: state.current().clone(),
            mobile_menu_open,
        }
    })
}
