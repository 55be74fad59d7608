use serde::{Deserialize, Serialize};

use crate::{active_filters::FilterNameLookup, search_query::ProductSearchQuery};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category_id: String,
    pub brand_id: String,
    pub price: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Unix seconds; newest sort order.
    #[serde(default)]
    pub created_at: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// Categories and brands available for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogFacets {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
}

impl FilterNameLookup for CatalogFacets {
    fn category_name(&self, id: &str) -> Option<String> {
        self.categories.iter().find(|c| c.id == id).map(|c| c.name.clone())
    }

    fn brand_name(&self, id: &str) -> Option<String> {
        self.brands.iter().find(|b| b.id == id).map(|b| b.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchResults {
    pub query: ProductSearchQuery,
    pub products: Vec<Product>,
    pub total_count: u64,
    pub page: u32,
    pub page_count: u32,
}
