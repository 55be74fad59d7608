//! Client API calls for product search endpoints.

use common::{search_query::ProductSearchQuery, search_result::{CatalogFacets, ProductSearchResults}};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }
}

#[server]
pub async fn search_for_products(input: ProductSearchQuery) -> Result<ProductSearchResults, ServerFnError> {
    let x = backend::api::search::search_for_products(input).await;
    x.map_err(server_error)
}

#[server]
pub async fn search_for_products_hit_count(input: ProductSearchQuery) -> Result<u64, ServerFnError> {
    let x = backend::api::search::search_for_products_hit_count(input).await;
    x.map_err(server_error)
}

#[server]
pub async fn list_catalog_facets() -> Result<CatalogFacets, ServerFnError> {
    let x = backend::api::catalog::list_catalog_facets().await;
    x.map_err(server_error)
}
