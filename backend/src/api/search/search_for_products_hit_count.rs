use common::search_query::ProductSearchQuery;

use crate::api::search::search_predicate::match_product;
use crate::db_utils::catalog_store::{Catalog, get_catalog};

pub async fn search_for_products_hit_count(query: ProductSearchQuery) -> anyhow::Result<u64> {
    let catalog = get_catalog().await?;
    Ok(count_matches(catalog, &query))
}

pub fn count_matches(catalog: &Catalog, query: &ProductSearchQuery) -> u64 {
    let terms = query.terms();
    catalog
        .products
        .iter()
        .filter(|product| match_product(product, query, &terms).is_some())
        .count() as u64
}
