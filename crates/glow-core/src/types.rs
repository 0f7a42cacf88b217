//! # Domain Types
//!
//! Catalog records shared by the cart store, the catalog provider and the
//! storefront renderer.
//!
//! ```text
//! ┌─────────────────────────┐      ┌─────────────────┐
//! │        Product          │      │    Category     │
//! │  ─────────────────────  │      │  ─────────────  │
//! │  id (stable string)     │─────►│  Skincare       │
//! │  name                   │      │  Makeup         │
//! │  price (Money, cents)   │      │  Sets           │
//! │  image (URI)            │      └─────────────────┘
//! └─────────────────────────┘
//! ```
//!
//! Products are immutable once the catalog is loaded. The cart stores its own
//! copy of each product it holds, so a line keeps rendering even if the
//! catalog it came from goes away.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. Each one has its own page in the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skincare,
    Makeup,
    Sets,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 3] = [Category::Skincare, Category::Makeup, Category::Sets];

    /// URL path segment (`"skincare"`).
    pub const fn slug(&self) -> &'static str {
        match self {
            Category::Skincare => "skincare",
            Category::Makeup => "makeup",
            Category::Sets => "sets",
        }
    }

    /// Display label (`"Skincare"`).
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Skincare => "Skincare",
            Category::Makeup => "Makeup",
            Category::Sets => "Sets",
        }
    }

    /// Looks a category up by its slug, case-insensitively.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, stable for the process lifetime.
    pub id: String,

    /// Display name shown on the product card and in the cart.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Image URI for the product card.
    pub image: String,

    pub category: Category,
}

impl Product {
    /// Creates a product record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
