//! Side navigation bar component.

use common::filter_state::FilterState;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch, MdShoppingCart};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::cart_store::use_cart;
use crate::routes::Route;


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarTopIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarCartLink{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::search_page_from_filters(&FilterState::default()), icon: MdSearch, label: "Search" }
        }
    }
}


#[component]
fn NavbarCartLink() -> Element {
    let cart = use_cart();
    let item_count = cart.item_count();

    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                width: 38px;
                align-items: center;
                justify-content: center;
                position: relative;
            ",

            IconLink { to: Route::CartPage { }, icon: MdShoppingCart, label: "Cart" }
            if item_count > 0 {
                span {
                    style: "
                        position: absolute;
                        top: -8px;
                        right: -6px;
                        min-width: 18px;
                        height: 18px;
                        border-radius: 9px;
                        background: #EB3E01;
                        color: white;
                        font-size: 12px;
                        text-align: center;
                        line-height: 18px;
                        pointer-events: none;
                    ",
                    "{item_count}"
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style:"color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
