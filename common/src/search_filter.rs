//! Mutations of the search filter state.
//!
//! Every local change goes through one of the functions here and comes back as a
//! [`FilterUpdate`]: the new state, the location it serializes to, and how the
//! client should navigate there. External location changes go the other way
//! through [`on_external_navigation`].

use serde::{Deserialize, Serialize};

use crate::{
    filter_state::{FilterField, FilterState},
    location::LocationDescriptor,
    search_const::{DEFAULT_PAGE, DEFAULT_SORT_BY},
};

/// How the client moves to the new location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Replace the current history entry.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub state: FilterState,
    pub location: LocationDescriptor,
    pub navigation: Navigation,
    pub scroll_to_top: bool,
}

impl FilterUpdate {
    fn replace(state: FilterState) -> Self {
        let location = state.serialize();
        Self { state, location, navigation: Navigation::Replace, scroll_to_top: false }
    }
}

/// Set one field. Any field but [`FilterField::Page`] also sends the user back to page 1.
pub fn set_field(state: &FilterState, field: FilterField, value: impl Into<String>) -> FilterUpdate {
    set_fields(state, [(field, value.into())])
}

/// Set several fields in one update, applying the page reset rule once.
pub fn set_fields(
    state: &FilterState,
    changes: impl IntoIterator<Item = (FilterField, String)>,
) -> FilterUpdate {
    let mut next = state.clone();
    let mut reset_page = false;
    for (field, value) in changes {
        reset_page |= field.resets_page();
        next.assign(field, value);
    }
    if reset_page {
        next.page = DEFAULT_PAGE;
    }
    FilterUpdate::replace(next)
}

/// Move to `page` and ask the client to scroll back to the top of the results.
pub fn set_page(state: &FilterState, page: u32) -> FilterUpdate {
    let mut update = set_field(state, FilterField::Page, page.to_string());
    update.scroll_to_top = true;
    update
}

/// Drop every filter and the sort order while keeping the search text.
///
/// Unlike the other updates, the resulting location always carries `sortBy`.
pub fn clear(state: &FilterState) -> FilterUpdate {
    let next = FilterState { query: state.query.clone(), ..FilterState::default() };
    let mut update = FilterUpdate::replace(next);
    update.location.insert(FilterField::SortBy.url_key(), DEFAULT_SORT_BY);
    update
}

/// Back/forward or any location change made outside the filter controls.
/// The location wins over whatever local state existed.
pub fn on_external_navigation(location: &LocationDescriptor) -> FilterState {
    FilterState::parse(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_page(page: u32) -> FilterState {
        FilterState {
            query: "phone".to_string(),
            category: "c1".to_string(),
            sort_by: "price_desc".to_string(),
            page,
            ..FilterState::default()
        }
    }

    #[test]
    fn brand_change_resets_page() {
        let update = set_field(&state_on_page(5), FilterField::Brand, "b2");
        assert_eq!(update.state.brand, "b2");
        assert_eq!(update.state.page, 1);
        assert_eq!(update.location.get("brand"), Some("b2"));
        assert!(!update.location.contains_key("page"));
        assert_eq!(update.navigation, Navigation::Replace);
        assert!(!update.scroll_to_top);
    }

    #[test]
    fn every_non_page_field_resets_page() {
        for field in FilterField::ALL.into_iter().filter(|f| *f != FilterField::Page) {
            let update = set_field(&state_on_page(9), field, "v");
            assert_eq!(update.state.page, 1, "{field:?}");
        }
    }

    #[test]
    fn page_change_keeps_other_fields() {
        let before = state_on_page(2);
        let update = set_field(&before, FilterField::Page, "7");
        assert_eq!(update.state, FilterState { page: 7, ..before });
        assert_eq!(update.location.get("page"), Some("7"));
    }

    #[test]
    fn set_page_scrolls_to_top() {
        let update = set_page(&state_on_page(1), 3);
        assert_eq!(update.state.page, 3);
        assert!(update.scroll_to_top);
    }

    #[test]
    fn set_page_zero_is_first_page() {
        let update = set_page(&state_on_page(4), 0);
        assert_eq!(update.state.page, 1);
        assert!(!update.location.contains_key("page"));
    }

    #[test]
    fn clear_preserves_query_and_writes_sort() {
        let update = clear(&FilterState {
            brand: "b1".to_string(),
            min_price: "1".to_string(),
            max_price: "2".to_string(),
            ..state_on_page(6)
        });
        assert_eq!(
            update.state,
            FilterState { query: "phone".to_string(), ..FilterState::default() }
        );
        assert_eq!(update.location.to_query_string(), "query=phone&sortBy=relevance");
    }

    #[test]
    fn clear_without_query_writes_only_sort() {
        let update = clear(&FilterState { query: String::new(), ..state_on_page(2) });
        assert_eq!(update.location.to_query_string(), "sortBy=relevance");
        assert_eq!(FilterState::parse(&update.location), FilterState::default());
    }

    #[test]
    fn set_fields_applies_all_changes_at_once() {
        let update = set_fields(
            &state_on_page(3),
            [(FilterField::MinPrice, String::new()), (FilterField::MaxPrice, String::new())],
        );
        assert_eq!(update.state.min_price, "");
        assert_eq!(update.state.max_price, "");
        assert_eq!(update.state.page, 1);
    }

    #[test]
    fn external_navigation_overwrites_local_state() {
        let local = set_field(&FilterState::default(), FilterField::Brand, "b1").state;
        let external = LocationDescriptor::from_query_string("category=c9&page=2");
        let state = on_external_navigation(&external);
        assert_ne!(state, local);
        assert_eq!(state.brand, "");
        assert_eq!(state.category, "c9");
        assert_eq!(state.page, 2);
    }
}
