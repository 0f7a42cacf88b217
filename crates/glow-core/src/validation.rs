//! # Validation Module
//!
//! Input validation for catalog records and cart input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog loading                                              │
//! │  └── validate_product: every record checked once at startup            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command layer (storefront app)                               │
//! │  └── validate_quantity: UI ceiling on what a shopper may type          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart store                                                   │
//! │  └── No validation: non-positive quantities are no-ops / removals      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use glow_core::validation::validate_quantity;
//!
//! assert!(validate_quantity(5, 99).is_ok());
//! assert!(validate_quantity(0, 99).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Letters, digits, hyphens and underscores only (ids end up in URLs)
///
/// ```rust
/// use glow_core::validation::validate_product_id;
///
/// assert!(validate_product_id("glow-essence-01").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("has space").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: non-empty, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an image reference.
///
/// Accepts absolute `http(s)://` URIs and site-relative paths (`/img/x.jpg`).
pub fn validate_image_uri(image: &str) -> ValidationResult<()> {
    let image = image.trim();

    if image.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    let ok = image.starts_with("https://") || image.starts_with("http://") || image.starts_with('/');
    if !ok {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be an http(s) URI or a site-relative path".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity typed by a shopper.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
///
/// The store accepts any quantity; the ceiling is a UI rule, which is why
/// the maximum is a parameter (it comes from the storefront config).
pub fn validate_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (samples, gifts).
///
/// ```rust
/// use glow_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1250).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a catalog record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price.cents())?;
    validate_image_uri(&product.image)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Category;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("glow-1").is_ok());
        assert!(validate_product_id("SET_02").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("has space").is_err());
        assert!(validate_product_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Rice Toner").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_image_uri() {
        assert!(validate_image_uri("https://images.example.com/a.jpg").is_ok());
        assert!(validate_image_uri("/static/a.jpg").is_ok());
        assert!(validate_image_uri("").is_err());
        assert!(validate_image_uri("ftp://x/a.jpg").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1, 99).is_ok());
        assert!(validate_quantity(99, 99).is_ok());

        assert!(matches!(
            validate_quantity(0, 99),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_quantity(-1, 99).is_err());
        assert!(matches!(
            validate_quantity(100, 99),
            Err(ValidationError::OutOfRange { max: 99, .. })
        ));
    }

    #[test]
    fn test_validate_product() {
        let mut product = Product::new(
            "glow-1",
            "Rice Toner",
            Money::from_cents(1800),
            "/img/toner.jpg",
            Category::Skincare,
        );
        assert!(validate_product(&product).is_ok());

        product.price = Money::from_cents(-1);
        assert!(validate_product(&product).is_err());
    }
}
