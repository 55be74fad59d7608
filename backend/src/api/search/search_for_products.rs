//! Search endpoint for product result pages.

use common::{
    search_const::PAGE_SIZE,
    search_query::ProductSearchQuery,
    search_result::{Product, ProductSearchResults},
};
use tracing::debug;

use crate::api::search::search_predicate::{compare_products, match_product};
use crate::db_utils::catalog_store::{Catalog, get_catalog};

pub async fn search_for_products(query: ProductSearchQuery) -> anyhow::Result<ProductSearchResults> {
    let catalog = get_catalog().await?;
    let results = search_catalog(catalog, &query);
    debug!(?query, total_count = results.total_count, "product search");
    Ok(results)
}

/// Matching products, best first.
fn ranked_matches<'a>(catalog: &'a Catalog, query: &ProductSearchQuery) -> Vec<(&'a Product, u64)> {
    let terms = query.terms();
    let mut hits = catalog
        .products
        .iter()
        .filter_map(|product| match_product(product, query, &terms).map(|score| (product, score)))
        .collect::<Vec<_>>();
    hits.sort_by(|a, b| compare_products(query.sort_by, *a, *b));
    hits
}

pub fn search_catalog(catalog: &Catalog, query: &ProductSearchQuery) -> ProductSearchResults {
    let hits = ranked_matches(catalog, query);
    let total_count = hits.len() as u64;
    let page_count = total_count.div_ceil(PAGE_SIZE) as u32;
    let page = query.page.max(1);
    let offset = u64::from(page - 1) * PAGE_SIZE;

    let products = hits
        .into_iter()
        .skip(offset as usize)
        .take(PAGE_SIZE as usize)
        .map(|(product, _score)| product.clone())
        .collect::<Vec<_>>();

    ProductSearchResults {
        query: query.clone(),
        products,
        total_count,
        page,
        page_count,
    }
}
