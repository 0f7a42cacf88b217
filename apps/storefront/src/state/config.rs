//! # Configuration State
//!
//! Storefront settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`GLOW_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock.

use std::path::PathBuf;

use glow_core::{Money, MAX_ITEM_QUANTITY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable names.
pub const ENV_STORE_NAME: &str = "GLOW_STORE_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "GLOW_CURRENCY_SYMBOL";
pub const ENV_CATALOG_PATH: &str = "GLOW_CATALOG_PATH";
pub const ENV_MAX_ITEM_QUANTITY: &str = "GLOW_MAX_ITEM_QUANTITY";

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    NotAPositiveInteger { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Brand shown in the nav bar and drawer.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,

    /// Largest quantity a shopper may put on one line.
    pub max_item_quantity: i64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "GLOW".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
            max_item_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

impl ConfigState {
    /// Reads `GLOW_*` environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `GLOW_STORE_NAME`: brand name
    /// - `GLOW_CURRENCY_SYMBOL`: e.g. `€`
    /// - `GLOW_CATALOG_PATH`: JSON catalog file
    /// - `GLOW_MAX_ITEM_QUANTITY`: per-line ceiling, positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup(ENV_STORE_NAME) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::Empty {
                    var: ENV_STORE_NAME,
                });
            }
            config.store_name = name.to_string();
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty {
                    var: ENV_CATALOG_PATH,
                });
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_MAX_ITEM_QUANTITY) {
            config.max_item_quantity = match raw.trim().parse::<i64>() {
                Ok(max) if max > 0 => max,
                _ => {
                    return Err(ConfigError::NotAPositiveInteger {
                        var: ENV_MAX_ITEM_QUANTITY,
                        value: raw,
                    })
                }
            };
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ```rust
    /// use glow_core::Money;
    /// use glow_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_money(Money::from_cents(3750)), "$37.50");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}
