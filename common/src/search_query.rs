//! Typed product search query derived from the filter state.

use serde::{Deserialize, Serialize};

use crate::{filter_state::FilterState, search_const::DEFAULT_PAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Newest,
    NameAsc,
}

impl SortBy {
    /// Unknown sort names mean relevance.
    pub fn from_url_value(value: &str) -> Self {
        match value {
            "price_asc" => SortBy::PriceAsc,
            "price_desc" => SortBy::PriceDesc,
            "newest" => SortBy::Newest,
            "name_asc" => SortBy::NameAsc,
            _ => SortBy::Relevance,
        }
    }

    pub fn url_value(self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Newest => "newest",
            SortBy::NameAsc => "name_asc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSearchQuery {
    pub query_string: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort_by: SortBy,
    pub page: u32,
}

impl Default for ProductSearchQuery {
    fn default() -> Self {
        Self {
            query_string: String::new(),
            category: None,
            brand: None,
            min_price: None,
            max_price: None,
            sort_by: SortBy::Relevance,
            page: DEFAULT_PAGE,
        }
    }
}

impl From<&FilterState> for ProductSearchQuery {
    fn from(state: &FilterState) -> Self {
        let id = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        // bounds that are not whole numbers do not filter
        let price = |s: &str| s.trim().parse::<u64>().ok();
        Self {
            query_string: state.query.trim().to_string(),
            category: id(&state.category),
            brand: id(&state.brand),
            min_price: price(&state.min_price),
            max_price: price(&state.max_price),
            sort_by: SortBy::from_url_value(&state.sort_by),
            page: state.page.max(DEFAULT_PAGE),
        }
    }
}

impl ProductSearchQuery {
    /// Lower-cased search terms.
    pub fn terms(&self) -> Vec<String> {
        self.query_string
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect()
    }

    /// The same query on the first page; hit counts do not depend on the page.
    pub fn for_hit_count(&self) -> Self {
        Self { page: DEFAULT_PAGE, ..self.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_filter_state() {
        let state = FilterState {
            query: "  red shoes ".to_string(),
            category: "c1".to_string(),
            brand: String::new(),
            min_price: "100".to_string(),
            max_price: "lots".to_string(),
            sort_by: "price_desc".to_string(),
            page: 2,
        };
        let q = ProductSearchQuery::from(&state);
        assert_eq!(q.query_string, "red shoes");
        assert_eq!(q.category.as_deref(), Some("c1"));
        assert_eq!(q.brand, None);
        assert_eq!(q.min_price, Some(100));
        assert_eq!(q.max_price, None);
        assert_eq!(q.sort_by, SortBy::PriceDesc);
        assert_eq!(q.page, 2);
        assert_eq!(q.terms(), ["red", "shoes"]);
    }

    #[test]
    fn hit_count_query_ignores_page() {
        let on_page = |page| ProductSearchQuery::from(&FilterState { page, ..FilterState::default() });
        assert_eq!(on_page(2).for_hit_count(), on_page(9).for_hit_count());
        assert_eq!(on_page(9).for_hit_count().page, 1);
    }

    #[test]
    fn unknown_sort_is_relevance() {
        assert_eq!(SortBy::from_url_value("cheapest-first"), SortBy::Relevance);
        for (value, _) in crate::search_const::SORT_MODES {
            assert_eq!(SortBy::from_url_value(value).url_value(), *value);
        }
    }
}
