use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::{filter_state::{FilterField, FilterState}, search_filter::set_field};
use crate::{
    api::search_api::list_catalog_facets,
    components::{error_boundary::ComponentErrorDisplay, suspend_boundary::SuspendWrapper},
    routes::Route,
};


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Storefront - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                TextSearchCard {}
                SuspendWrapper { CategoryCard {} }
            }
        }
    }
}

/// Search route for a single field set on an otherwise empty search.
fn search_route_with(field: FilterField, value: String) -> Route {
    let update = set_field(&FilterState::default(), field, value);
    Route::SearchPage { location: update.location }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Welcome to the" }
            span { style: "color:#4F46E5;", "Storefront" }
        }
    }
}

#[component]
fn TextSearchCard() -> Element {

    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 200px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Find a product"
            }

            div {
                style: "
                    font-size: 16px;
                    color: rgba(255,255,255,0.9);
                    width: 100%;
                ",
                "*Type search terms in the text box below and hit Enter to start."
            }
            SearchCardInput {}
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search products",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        n2.push(search_route_with(FilterField::Query, search_q.read().trim().to_string()));
                    }
                },
            }
        }
    }
}

#[component]
fn CategoryCard() -> Element {
    let facets = use_resource(list_catalog_facets).suspend()?.cloned();
    let facets = match facets {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(f) => f,
    };

    rsx! {
        div {
            id: "x-card-categories",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 200px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            div {
                style: "
                    font-size: 26px;
                    font-weight: 500;
                ",
                "Shop by category"
            }

            div {
                style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 10px;",
                for category in facets.categories {
                    Link {
                        key: "{category.id}",
                        to: search_route_with(FilterField::Category, category.id.clone()),
                        span {
                            style: "
                                display: inline-block;
                                padding: 6px 14px;
                                border-radius: 1000px;
                                border: 1px solid #C7D2FE;
                                background: #EEF2FF;
                                color: #4F46E5;
                                font-size: 16px;
                            ",
                            "{category.name}"
                        }
                    }
                }
            }
        }
    }
}
