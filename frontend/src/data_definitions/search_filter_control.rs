//! Filter controls shared by the search page components.
//!
//! Components never touch the location directly: they read [`FilterState`] from
//! the context and send every change through [`SearchFilterControl`], which
//! turns it into a [`FilterUpdate`] and replaces the current route.

use common::{
    filter_state::{FilterField, FilterState},
    search_filter::{self, FilterUpdate, Navigation},
};
use dioxus::{logger::tracing::{debug, error}, prelude::*};

use crate::routes::Route;

const SCROLL_TO_TOP_JS: &str = r#"
    window.scrollTo({ top: 0 });
    document.getElementById("x-search-results-grid")?.scrollTo({ top: 0 });
"#;

#[derive(Debug, Clone, PartialEq, Copy)]
pub struct SearchFilterControl {
    pub filters: ReadSignal<FilterState>,
    pub apply_update: Callback<FilterUpdate>,
}

impl SearchFilterControl {
    pub fn new(filters: ReadSignal<FilterState>) -> Self {
        Self { filters, apply_update: Callback::new(navigate_to_filters) }
    }

    pub fn set_field(&self, field: FilterField, value: String) {
        let update = search_filter::set_field(&self.filters.peek(), field, value);
        self.apply_update.call(update);
    }

    pub fn set_page(&self, page: u32) {
        let update = search_filter::set_page(&self.filters.peek(), page);
        self.apply_update.call(update);
    }

    pub fn clear(&self) {
        let update = search_filter::clear(&self.filters.peek());
        self.apply_update.call(update);
    }
}

/// Execute a filter update: move to its location and scroll if it asks to.
pub fn navigate_to_filters(update: FilterUpdate) {
    debug!("filters -> ?{}", update.location);
    let route = Route::SearchPage { location: update.location };
    match update.navigation {
        Navigation::Replace => {
            navigator().replace(route);
        }
    }
    if update.scroll_to_top {
        spawn(async move {
            if let Err(e) = document::eval(SCROLL_TO_TOP_JS).await {
                error!("failed to scroll results to top: {e:?}");
            }
        });
    }
}

pub fn use_search_filters() -> SearchFilterControl {
    use_context::<SearchFilterControl>()
}
