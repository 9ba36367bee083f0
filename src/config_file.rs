//! Catalog file handling for saving and loading product lists.
//!
//! A catalog file is a JSON document replacing the built-in product list:
//!
//! ```json
//! { "products": [ { "name": "iPad Pro", "price": 1099, "quantity": 40 } ] }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, Product};
use crate::error::CartError;

/// Catalog contents that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
}

impl CatalogFile {
    /// Snapshot of the built-in catalog
    pub fn seeded() -> Self {
        Self::from_catalog(&Catalog::seeded())
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            products: catalog.list_all().iter().map(|p| (**p).clone()).collect(),
        }
    }

    /// Save catalog to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize catalog to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Validate the catalog
    ///
    /// Duplicate display labels are allowed but logged: products sharing a
    /// label are always ticked into the cart together.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.products.is_empty() {
            return Err(CartError::config("Catalog must contain at least one product"));
        }

        let mut seen = HashSet::new();
        for (index, product) in self.products.iter().enumerate() {
            if product.name().trim().is_empty() {
                return Err(CartError::config(format!(
                    "Product #{} has an empty name",
                    index + 1
                )));
            }
            if product.name().contains('\n') {
                return Err(CartError::config(format!(
                    "Product #{} name spans multiple lines",
                    index + 1
                )));
            }

            let label = product.display_label();
            if !seen.insert(label.clone()) {
                tracing::warn!(
                    "Duplicate catalog label {:?}; these products are selected together",
                    label
                );
            }
        }

        Ok(())
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog::from_products(self.products)
    }
}
