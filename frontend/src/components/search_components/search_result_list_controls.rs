//! Hit count and page navigation above the product grid.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::components::search_components::search_panel_results_view::SearchResultsState;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-panel-title-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
                align-items: center;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchForProductsHitCountString { }
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            ControlNextPrevPage {}
        }
    }
}


#[component]
fn ControlNextPrevPage() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let current_page = search_results_state.current_page;
    let set_current_page = search_results_state.set_current_page;

    let max_pages = use_memo(move || {
        let search_result = search_results_state.search_result.read();
        match search_result.as_ref() {
            Some(Ok(result)) => result.page_count,
            _ => 0,
        }
    });
    let selected_page = use_memo(move || current_page().min(max_pages()));
    let can_go_to_previous_page = use_memo(move || current_page() > 1);
    let can_go_to_next_page = use_memo(move || current_page() < max_pages());

    rsx! {
        // prev page
        NavigationButton {
            icon: MdArrowBack,
            label: "Previous Page",
            disabled: !can_go_to_previous_page(),
            onclick: move |_| {
                // past-the-end pages step straight back to the last real page
                let target = if current_page() > max_pages() { max_pages().max(1) } else { current_page() - 1 };
                set_current_page(target);
            }
        }
        // current page counter
        div {
            style: "
                font-size: 16px;
                line-height: 21px;
                font-weight: 400;
                background-color: white;
                border-radius: 2px;
                border-left: 1px solid rgba(0,0,0,0.1);
                border-right: 1px solid rgba(0,0,0,0.1);
                padding: 4px 26px;
                align-items: center;
                align-content: center;
            ",
            "{selected_page()}"
            span {
                style: "color: rgba(0,0,0,0.5);",
                "/{max_pages()}"
            }
        }
        // next page
        NavigationButton {
            icon: MdArrowForward,
            label: "Next Page",
            disabled: !can_go_to_next_page(),
            onclick: move |_| {
                set_current_page(current_page() + 1);
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}


#[component]
fn SearchForProductsHitCountString() -> Element {
    let search_results_state = use_context::<SearchResultsState>();
    let hit_count = search_results_state.hit_count;

    match hit_count.read().as_ref() {
        Some(Err(e)) => rsx! { "! error: {e:?}" },
        Some(Ok(1)) => rsx! { "1 product found" },
        Some(Ok(s)) => rsx! { "{s} products found" },
        None => rsx! {"..."},
    }
}
