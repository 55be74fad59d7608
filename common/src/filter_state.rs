//! Search filter state and its mapping to location query parameters.

use serde::{Deserialize, Serialize};

use crate::{
    location::LocationDescriptor,
    search_const::{DEFAULT_PAGE, DEFAULT_SORT_BY},
};

/// Read-only alias accepted for the `query` parameter.
pub const QUERY_ALIAS_KEY: &str = "q";

/// The closed set of fields a [`FilterState`] can be updated through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterField {
    Query,
    Category,
    Brand,
    MinPrice,
    MaxPrice,
    SortBy,
    Page,
}

impl FilterField {
    /// All fields, in serialization order.
    pub const ALL: [FilterField; 7] = [
        FilterField::Query,
        FilterField::Category,
        FilterField::Brand,
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::SortBy,
        FilterField::Page,
    ];

    pub fn url_key(self) -> &'static str {
        match self {
            FilterField::Query => "query",
            FilterField::Category => "category",
            FilterField::Brand => "brand",
            FilterField::MinPrice => "minPrice",
            FilterField::MaxPrice => "maxPrice",
            FilterField::SortBy => "sortBy",
            FilterField::Page => "page",
        }
    }

    /// Whether changing this field sends the user back to the first page.
    pub fn resets_page(self) -> bool {
        self != FilterField::Page
    }
}

/// What the user is currently searching for and how results are filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub brand: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_by: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            brand: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            page: DEFAULT_PAGE,
        }
    }
}

impl FilterState {
    /// Build the state from location parameters. Missing or malformed values take their defaults.
    pub fn parse(location: &LocationDescriptor) -> Self {
        let text = |field: FilterField| location.get(field.url_key()).unwrap_or_default().to_string();

        let query = location
            .get(FilterField::Query.url_key())
            .filter(|q| !q.is_empty())
            .or_else(|| location.get(QUERY_ALIAS_KEY))
            .unwrap_or_default()
            .to_string();

        let sort_by = location
            .get(FilterField::SortBy.url_key())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SORT_BY)
            .to_string();

        Self {
            query,
            category: text(FilterField::Category),
            brand: text(FilterField::Brand),
            min_price: text(FilterField::MinPrice),
            max_price: text(FilterField::MaxPrice),
            sort_by,
            page: parse_page(location.get(FilterField::Page.url_key())),
        }
    }

    /// Location parameters for this state, leaving out empty and default values.
    pub fn serialize(&self) -> LocationDescriptor {
        FilterField::ALL
            .into_iter()
            .filter(|field| !self.is_default(*field))
            .map(|field| (field.url_key(), self.field_value(field)))
            .collect()
    }

    pub fn field_value(&self, field: FilterField) -> String {
        match field {
            FilterField::Query => self.query.clone(),
            FilterField::Category => self.category.clone(),
            FilterField::Brand => self.brand.clone(),
            FilterField::MinPrice => self.min_price.clone(),
            FilterField::MaxPrice => self.max_price.clone(),
            FilterField::SortBy => self.sort_by.clone(),
            FilterField::Page => self.page.to_string(),
        }
    }

    pub fn is_default(&self, field: FilterField) -> bool {
        match field {
            // empty sort and page 0 normalize to the defaults
            FilterField::SortBy => self.sort_by.is_empty() || self.sort_by == DEFAULT_SORT_BY,
            FilterField::Page => self.page <= DEFAULT_PAGE,
            other => self.field_value(other).is_empty(),
        }
    }

    /// True when a category, brand or price bound narrows the results.
    pub fn has_active_filters(&self) -> bool {
        !(self.category.is_empty()
            && self.brand.is_empty()
            && self.min_price.is_empty()
            && self.max_price.is_empty())
    }

    /// Raw assignment, without the page reset rule.
    pub(crate) fn assign(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Query => self.query = value,
            FilterField::Category => self.category = value,
            FilterField::Brand => self.brand = value,
            FilterField::MinPrice => self.min_price = value,
            FilterField::MaxPrice => self.max_price = value,
            FilterField::SortBy => {
                self.sort_by = if value.is_empty() { DEFAULT_SORT_BY.to_string() } else { value }
            }
            FilterField::Page => self.page = parse_page(Some(&value)),
        }
    }
}

/// Positive page number, or the first page.
pub(crate) fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= DEFAULT_PAGE)
        .unwrap_or(DEFAULT_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(pairs: &[(&str, &str)]) -> LocationDescriptor {
        pairs.iter().copied().collect()
    }

    #[test]
    fn parse_category_and_page() {
        let state = FilterState::parse(&loc(&[("category", "c1"), ("page", "3")]));
        assert_eq!(
            state,
            FilterState {
                query: "".to_string(),
                category: "c1".to_string(),
                brand: "".to_string(),
                min_price: "".to_string(),
                max_price: "".to_string(),
                sort_by: "relevance".to_string(),
                page: 3,
            }
        );
    }

    #[test]
    fn parse_query_alias() {
        assert_eq!(FilterState::parse(&loc(&[("q", "shoes")])).query, "shoes");
        assert_eq!(
            FilterState::parse(&loc(&[("query", "shoes"), ("q", "ignored")])).query,
            "shoes"
        );
        assert_eq!(
            FilterState::parse(&loc(&[("q", "ignored"), ("query", "shoes")])).query,
            "shoes"
        );
    }

    #[test]
    fn alias_is_never_written() {
        let state = FilterState::parse(&loc(&[("q", "shoes")]));
        let out = state.serialize();
        assert_eq!(out.get("query"), Some("shoes"));
        assert!(!out.contains_key("q"));
    }

    #[test]
    fn malformed_page_falls_back_to_first() {
        for raw in ["", "abc", "0", "-2", "1.5"] {
            assert_eq!(FilterState::parse(&loc(&[("page", raw)])).page, 1, "page={raw:?}");
        }
        assert_eq!(FilterState::parse(&loc(&[("page", " 7 ")])).page, 7);
    }

    #[test]
    fn empty_sort_falls_back_to_default() {
        assert_eq!(FilterState::parse(&loc(&[("sortBy", "")])).sort_by, "relevance");
    }

    #[test]
    fn default_state_serializes_to_nothing() {
        assert!(FilterState::default().serialize().is_empty());
        assert_eq!(FilterState::parse(&LocationDescriptor::new()), FilterState::default());
    }

    #[test]
    fn out_of_range_fields_serialize_as_defaults() {
        let state = FilterState {
            sort_by: String::new(),
            page: 0,
            brand: "b1".to_string(),
            ..FilterState::default()
        };
        let location = state.serialize();
        assert_eq!(location.to_query_string(), "brand=b1");
        assert_eq!(
            FilterState::parse(&location),
            FilterState { brand: "b1".to_string(), ..FilterState::default() }
        );
    }

    #[test]
    fn serialize_uses_fixed_key_order() {
        let state = FilterState {
            query: "phone".to_string(),
            category: "c1".to_string(),
            brand: "b2".to_string(),
            min_price: "100".to_string(),
            max_price: "900".to_string(),
            sort_by: "price_asc".to_string(),
            page: 4,
        };
        assert_eq!(
            state.serialize().to_query_string(),
            "query=phone&category=c1&brand=b2&minPrice=100&maxPrice=900&sortBy=price_asc&page=4"
        );
    }

    #[test]
    fn has_active_filters_ignores_query_and_sort() {
        let mut state = FilterState {
            query: "x".to_string(),
            sort_by: "newest".to_string(),
            page: 3,
            ..FilterState::default()
        };
        assert!(!state.has_active_filters());
        state.max_price = "10".to_string();
        assert!(state.has_active_filters());
    }
}
