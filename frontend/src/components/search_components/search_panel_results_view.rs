//! Result panel: hit count, pagination and the product grid.

use dioxus::prelude::*;

use common::search_query::ProductSearchQuery;
use common::search_result::ProductSearchResults;
use crate::{
    api::search_api::{search_for_products, search_for_products_hit_count},
    components::{
        error_boundary::ComponentErrorDisplay,
        search_components::{product_result_card::ProductResultCard, search_result_list_controls::SearchResultListControls},
        suspend_boundary::{LoadingIndicator, SuspendWrapper},
    },
    data_definitions::search_filter_control::use_search_filters,
};

#[derive(Copy, Clone)]
pub struct SearchResultsState {
    pub hit_count: ReadSignal<Option<Result<u64, ServerFnError>>>,
    pub search_result: ReadSignal<Option<Result<ProductSearchResults, ServerFnError>>>,
    pub current_page: Memo<u32>,
    pub set_current_page: Callback<u32>,
}

#[component]
pub fn SearchPanelResultsView() -> Element {
    let control = use_search_filters();
    let filters = control.filters;
    let product_query = use_memo(move || ProductSearchQuery::from(&*filters.read()));

    // memo equality keeps page changes from refetching the count
    let count_query = use_memo(move || product_query.read().for_hit_count());

    let hit_count = use_resource(move || {
        let q = count_query();
        search_for_products_hit_count(q)
    });

    let search_result = use_resource(move || {
        let q = product_query();
        search_for_products(q)
    });

    let current_page = use_memo(move || filters.read().page);
    let set_current_page = Callback::new(move |page: u32| control.set_page(page));
    use_context_provider(move || SearchResultsState {
        hit_count: hit_count.into(),
        search_result: search_result.into(),
        current_page,
        set_current_page,
    });

    rsx! {
        div {
            id: "x-search-panel-results-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                flex-grow: 1;
                min-height: 0;
                width: 100%;
            ",
            SearchResultListControls {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                min-height: 0;
                ",
                SuspendWrapper {
                    SearchResultsGrid { }
                }
            }
        }
    }
}

#[component]
fn SearchResultsGrid() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let search_result = search_results_state.search_result;
    let search_result = search_result.read();
    let search_result = match search_result.as_ref() {
        Some(Err(e)) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Some(Ok(s)) => s,
        None => return rsx! { LoadingIndicator{} },
    };

    if search_result.products.is_empty() {
        return rsx! {
            div {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); padding: 24px;",
                if search_result.total_count > 0 {
                    "No products on this page."
                } else {
                    "No products match these filters."
                }
            }
        };
    }

    let products = search_result.products.clone();
    rsx! {
        ul {
            id: "x-search-results-grid",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 12px;
                align-content: start;
            ",
            for product in products {
                li {
                    key: "{product.id}",
                    ProductResultCard { product }
                }
            }
        }
    }
}
