//! Product catalog storage: a JSON document loaded once per process.

use std::path::{Path, PathBuf};

use anyhow::Context;
use common::search_result::{Brand, Category, Product};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

pub const CATALOG_PATH_ENV: &str = "STOREFRONT_CATALOG_PATH";
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

static CATALOG: OnceCell<Catalog> = OnceCell::const_new();

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

pub fn catalog_path() -> PathBuf {
    match std::env::var(CATALOG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            warn!("{CATALOG_PATH_ENV} not set, using {DEFAULT_CATALOG_PATH}");
            PathBuf::from(DEFAULT_CATALOG_PATH)
        }
    }
}

pub async fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read product catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_slice(&raw)
        .with_context(|| format!("invalid product catalog {}", path.display()))?;
    info!(
        products = catalog.products.len(),
        categories = catalog.categories.len(),
        brands = catalog.brands.len(),
        "loaded product catalog from {}",
        path.display()
    );
    Ok(catalog)
}

/// The process-wide catalog, loaded on first use.
pub async fn get_catalog() -> anyhow::Result<&'static Catalog> {
    CATALOG
        .get_or_try_init(|| async { load_catalog(&catalog_path()).await })
        .await
}
