use dioxus::prelude::*;
use common::filter_state::FilterField;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use crate::data_definitions::search_filter_control::use_search_filters;


#[component]
pub fn SearchInputTopBar() -> Element {
    let control = use_search_filters();
    let filters = control.filters;
    let mut typed_query = use_signal(|| filters.read().query.clone());
    // navigation does not remount this component, so follow the query from the location
    use_effect(move || {
        let new_query = filters.read().query.clone();
        typed_query.set(new_query);
    });
    let query_has_changed = use_memo(move || *typed_query.read() != filters.read().query);
    let search_button_color = use_memo(move || if query_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        if query_has_changed() {
            control.set_field(FilterField::Query, typed_query.read().clone());
        }
    };
    let search_oninput = move |event: Event<FormData>| {
        typed_query.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search products",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{typed_query}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
