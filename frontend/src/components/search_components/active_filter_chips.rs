//! Removable chips for the filters narrowing the current search.

use dioxus::prelude::*;
use common::active_filters::{ActiveFilter, GroupedPriceFormatter, active_filter_summary};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::{
    api::search_api::list_catalog_facets,
    components::error_boundary::ComponentErrorDisplay,
    data_definitions::search_filter_control::use_search_filters,
};

#[component]
pub fn ActiveFilterChips() -> Element {
    let control = use_search_filters();
    let facets = use_resource(list_catalog_facets).suspend()?.cloned();
    let facets = match facets {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(f) => f,
    };
    let summary = active_filter_summary(&control.filters.read(), &facets, &GroupedPriceFormatter::default());
    if summary.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 8px;
                padding: 10px 14px 0px 14px;
            ",
            for filter in summary {
                FilterChip { key: "{filter.kind.name()}", filter }
            }
        }
    }
}

#[component]
fn FilterChip(filter: ActiveFilter) -> Element {
    let control = use_search_filters();
    let prefix = filter.kind.name();
    let label = filter.label.clone();

    rsx! {
        span {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                border: 2px solid rgba(0,0,255,0.9);
                border-radius: 1000px;
                background-color: white;
                padding: 2px 6px 2px 12px;
                font-size: 14px;
                white-space: nowrap;
            ",
            span { style: "color: rgba(0,0,0,0.5);", "{prefix}:" }
            span { "{label}" }
            button {
                title: "Remove filter",
                style: "border: none; background: none; cursor: pointer; display: flex; padding: 0px;",
                onclick: move |_| {
                    let update = filter.remove(&control.filters.peek());
                    control.apply_update.call(update);
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
