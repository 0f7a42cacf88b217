//! # Catalog State
//!
//! The product catalog for this run: the bundled list, or the JSON file
//! named by `GLOW_CATALOG_PATH`.

use std::sync::Arc;

use glow_core::Catalog;
use tracing::info;

use crate::error::AppError;
use crate::state::ConfigState;

/// Read-only catalog shared by commands and the renderer.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the catalog the configuration asks for.
    pub fn load(config: &ConfigState) -> Result<Self, AppError> {
        let Some(path) = &config.catalog_path else {
            let catalog = Catalog::builtin();
            info!(products = catalog.len(), "using bundled catalog");
            return Ok(CatalogState::new(catalog));
        };

        let contents =
            std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
                path: path.clone(),
                source,
            })?;
        let catalog = Catalog::from_json(&contents)?;

        info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(CatalogState::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
