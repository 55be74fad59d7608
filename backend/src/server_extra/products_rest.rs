use axum::{
    Json,
    extract::{Path, RawQuery},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{filter_state::FilterState, location::LocationDescriptor, search_query::ProductSearchQuery};
use tracing::{error, info};

use crate::api::{catalog::{get_product, list_catalog_facets}, search::search_for_products};

/// Build the product query from the same location parameters the search page uses.
pub fn query_from_raw(raw_query: Option<&str>) -> ProductSearchQuery {
    let location = LocationDescriptor::from_query_string(raw_query.unwrap_or_default());
    ProductSearchQuery::from(&FilterState::parse(&location))
}

fn internal_error(err: anyhow::Error) -> Response {
    error!("REST request failed: {err:#}");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}")).into_response()
}

/// `GET /api/products?query=..&category=..&page=..`
pub async fn search_products_rest(RawQuery(raw_query): RawQuery) -> Response {
    let query = query_from_raw(raw_query.as_deref());
    match search_for_products(query).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => internal_error(err),
    }
}

/// `GET /api/products/{product_id}`
pub async fn get_product_rest(Path(product_id): Path<String>) -> Response {
    info!("Fetching product: {}", product_id);
    match get_product(product_id).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(err) => internal_error(err),
    }
}

/// `GET /api/catalog/facets`
pub async fn catalog_facets_rest() -> Response {
    match list_catalog_facets().await {
        Ok(facets) => Json(facets).into_response(),
        Err(err) => internal_error(err),
    }
}
