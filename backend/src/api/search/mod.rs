//! Product search API and module exports.

mod search_for_products;
pub use search_for_products::{search_catalog, search_for_products};

mod search_for_products_hit_count;
pub use search_for_products_hit_count::{count_matches, search_for_products_hit_count};

pub mod search_predicate;
