//! Catalog listing API and module exports.

mod list_catalog_facets;
pub use list_catalog_facets::{catalog_facets, list_catalog_facets};

mod get_product;
pub use get_product::{find_product, get_product};
