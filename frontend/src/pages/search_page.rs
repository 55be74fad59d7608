use dioxus::prelude::*;

use common::{filter_state::FilterState, location::LocationDescriptor, search_filter::on_external_navigation};
use crate::{
    components::{
        search_components::{
            active_filter_chips::ActiveFilterChips, filter_sidebar::FilterSidebar,
            search_input_top_bar::SearchInputTopBar, search_panel_results_view::SearchPanelResultsView,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::search_filter_control::SearchFilterControl,
};


fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(location: LocationDescriptor) -> Element {
    // the router hands us a fresh location on every navigation, including back/forward
    let filters = on_external_navigation(&location);
    let title = if filters.query.is_empty() {
        "Storefront - Search".to_string()
    } else {
        format!("Storefront: {}", title_ellipsis(&filters.query))
    };

    rsx! {
        Title { "{title}" }
        SearchPageRootComponent { filters }
    }
}

#[component]
fn SearchPageRootComponent(filters: ReadSignal<FilterState>) -> Element {
    use_context_provider(move || SearchFilterControl::new(filters));

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-filter-sidebar",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-shrink: 0;
                        width: 280px;
                        overflow-y: auto;
                    ",
                    SuspendWrapper { FilterSidebar {} }
                }
                div {
                    id: "x-search-results-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 400px;
                        display: flex;
                        flex-direction: column;
                    ",
                    SuspendWrapper { ActiveFilterChips {} }
                    SuspendWrapper { SearchPanelResultsView {} }
                }
            }
        }
    }
}
