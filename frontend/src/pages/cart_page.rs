use dioxus::prelude::*;
use common::{active_filters::{GroupedPriceFormatter, PriceFormatter}, cart::CartLine, filter_state::FilterState};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDelete, md_content_icons::{MdAdd, MdRemove}}};

use crate::{data_definitions::cart_store::use_cart, routes::Route};

fn format_price(amount: u64) -> String {
    GroupedPriceFormatter::default().format_price(&amount.to_string())
}

/// Cart page
#[component]
pub fn CartPage() -> Element {
    let cart = use_cart();
    let state = cart.state();

    rsx! {
        Title { "Storefront - Cart ({state.item_count()})" }
        div {
            id: "x-cart-container",
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
            h1 { style: "font-size: 36px; font-weight: 500; color: #0F172A;", "Your cart" }

            if state.is_empty() {
                div {
                    style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112);",
                    "Your cart is empty. "
                    Link {
                        to: Route::search_page_from_filters(&FilterState::default()),
                        "Browse products"
                    }
                }
            } else {
                ul {
                    style: "display: flex; flex-direction: column; gap: 10px; max-width: 820px;",
                    for line in state.lines.clone() {
                        li {
                            key: "{line.product_id}",
                            CartLineRow { line }
                        }
                    }
                }
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 20px;
                        max-width: 820px;
                        font-size: 22px;
                    ",
                    span { "Subtotal:" }
                    span { style: "font-weight: 600; color: #4F46E5;", "{format_price(state.subtotal())}" }
                    div { style: "flex-grow: 1;" }
                    button {
                        style: "
                            height: 36px;
                            padding: 0 14px;
                            border-radius: 8px;
                            background: white;
                            border: 1px solid #D1D5DB;
                            cursor: pointer;
                            font-size: 15px;
                        ",
                        onclick: move |_| cart.clear(),
                        "Empty cart"
                    }
                }
            }
        }
    }
}

#[component]
fn CartLineRow(line: CartLine) -> Element {
    let cart = use_cart();
    let product_id = line.product_id.clone();
    let quantity = line.quantity;
    let line_total = format_price(line.line_total());
    let unit_price = format_price(line.unit_price);

    let id_dec = product_id.clone();
    let id_inc = product_id.clone();
    let id_del = product_id.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 10px;
                padding: 12px 16px;
            ",
            div {
                style: "display: flex; flex-direction: column; flex-grow: 1; min-width: 0;",
                span { style: "font-size: 18px; font-weight: 500;", "{line.name}" }
                span { style: "font-size: 14px; color: rgba(0,0,0,0.6);", "{unit_price} each" }
            }
            button {
                title: "Decrease quantity",
                style: "border: 1px solid #D1D5DB; background: white; border-radius: 6px; cursor: pointer; display: flex;",
                onclick: move |_| cart.set_quantity(&id_dec, quantity.saturating_sub(1)),
                Icon { icon: MdRemove, style: "width: 18px; height: 18px;" }
            }
            span { style: "min-width: 24px; text-align: center; font-size: 16px;", "{quantity}" }
            button {
                title: "Increase quantity",
                style: "border: 1px solid #D1D5DB; background: white; border-radius: 6px; cursor: pointer; display: flex;",
                onclick: move |_| cart.set_quantity(&id_inc, quantity.saturating_add(1)),
                Icon { icon: MdAdd, style: "width: 18px; height: 18px;" }
            }
            span { style: "min-width: 120px; text-align: right; font-size: 16px; font-weight: 600;", "{line_total}" }
            button {
                title: "Remove",
                style: "border: none; background: none; cursor: pointer; display: flex;",
                onclick: move |_| cart.remove(&id_del),
                Icon { icon: MdDelete, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.6);" }
            }
        }
    }
}
