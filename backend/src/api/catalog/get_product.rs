use common::search_result::Product;

use crate::db_utils::catalog_store::{Catalog, get_catalog};

pub async fn get_product(product_id: String) -> anyhow::Result<Option<Product>> {
    let catalog = get_catalog().await?;
    Ok(find_product(catalog, &product_id).cloned())
}

pub fn find_product<'a>(catalog: &'a Catalog, product_id: &str) -> Option<&'a Product> {
    catalog.products.iter().find(|p| p.id == product_id)
}
