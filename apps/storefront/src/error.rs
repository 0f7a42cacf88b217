//! # Error Types
//!
//! Errors the storefront shell can surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Startup / terminal              Per command                            │
//! │  ──────────────────              ───────────                            │
//! │  ConfigError ──┐                 ValidationError ──► CoreError ──┐      │
//! │  io::Error ────┼──► AppError                                     ▼      │
//! │  CoreError ────┘        │                                    ApiError   │
//! │                         ▼                                        │      │
//! │               logged, process exits                 shown as a notice,  │
//! │                                                     session continues  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use glow_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

use crate::state::ConfigError;

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the storefront: bad startup input or a broken terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("could not read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog rejected: {0}")]
    Catalog(#[from] CoreError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: glow-404"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product or page
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart rule rejected the request
    CartError,

    /// Catalog could not be used
    CatalogError,

    /// Unexpected failure inside the shell
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::CartError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            e @ (CoreError::DuplicateProduct(_) | CoreError::InvalidCatalog(_)) => {
                tracing::error!("catalog error reached a command: {}", e);
                ApiError::new(ErrorCode::CatalogError, e.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
