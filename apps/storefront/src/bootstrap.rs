//! # Catalog Bootstrap
//!
//! Builds the session catalog at startup. A JSON file wins when
//! `TALLY_CATALOG` names one; otherwise the built-in demo table below
//! is used, so the shell runs with no setup at all.
//!
//! ## Demo Products
//! A handful of electronics with fixed prices, enough to exercise every
//! command. Ids are small integers so they are easy to type.

use std::fs;

use tally_core::{Catalog, Product, ProductId};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::AppError;

/// Built-in demo products: (id, name, price in cents).
const DEMO_PRODUCTS: &[(u32, &str, i64)] = &[
    (1, "Laptop", 99999),
    (2, "Smartphone", 49999),
    (3, "Headphones", 19999),
    (4, "Smartwatch", 29999),
    (5, "Keyboard", 7999),
];

/// Builds the built-in demo catalog.
pub fn demo_catalog() -> Catalog {
    Catalog::new(
        DEMO_PRODUCTS
            .iter()
            .map(|&(id, name, price_cents)| Product::new(ProductId::new(id), name, price_cents))
            .collect(),
    )
}

/// Loads the catalog the session will run over.
///
/// ## Errors
/// Fails when a configured catalog file cannot be read or parsed. The
/// demo path cannot fail.
pub fn load_catalog(config: &StoreConfig) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => {
            debug!(path = %path.display(), "Reading catalog file");
            let json = fs::read_to_string(path).map_err(|source| AppError::CatalogFile {
                path: path.clone(),
                source,
            })?;
            let catalog = Catalog::from_json(&json)?;
            info!(products = catalog.len(), path = %path.display(), "Catalog loaded from file");
            Ok(catalog)
        }
        None => {
            let catalog = demo_catalog();
            info!(products = catalog.len(), "Using built-in demo catalog");
            Ok(catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 5);

        let laptop = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.price_cents, 99999);

        let headphones = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(headphones.name, "Headphones");
        assert_eq!(headphones.price_cents, 19999);
    }

    #[test]
    fn test_demo_ids_are_unique() {
        let catalog = demo_catalog();
        for product in catalog.iter() {
            let matching = catalog.iter().filter(|p| p.id == product.id).count();
            assert_eq!(matching, 1, "duplicate id {}", product.id);
        }
    }

    #[test]
    fn test_load_catalog_defaults_to_demo() {
        let config = StoreConfig::default();
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), demo_catalog().len());
    }

    #[test]
    fn test_load_catalog_reports_missing_file() {
        let config = StoreConfig {
            catalog_path: Some("/no/such/catalog.json".into()),
            ..StoreConfig::default()
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, AppError::CatalogFile { .. }));
        assert!(err.to_string().contains("/no/such/catalog.json"));
    }
}
