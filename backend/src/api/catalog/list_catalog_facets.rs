use common::search_result::CatalogFacets;

use crate::db_utils::catalog_store::{Catalog, get_catalog};

/// Categories and brands for the filter controls, sorted by display name.
pub async fn list_catalog_facets() -> anyhow::Result<CatalogFacets> {
    let catalog = get_catalog().await?;
    Ok(catalog_facets(catalog))
}

pub fn catalog_facets(catalog: &Catalog) -> CatalogFacets {
    let mut categories = catalog.categories.clone();
    categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    let mut brands = catalog.brands.clone();
    brands.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    CatalogFacets { categories, brands }
}
