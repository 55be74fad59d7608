//! Product card shown in the search result grid.

use dioxus::prelude::*;
use common::{active_filters::{GroupedPriceFormatter, PriceFormatter}, search_result::Product};
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdAddShoppingCart, MdShoppingCart}};

use crate::data_definitions::cart_store::use_cart;

#[component]
pub fn ProductResultCard(product: ReadSignal<Product>) -> Element {
    let cart = use_cart();
    let Product { id, name, description, price, image_url, .. } = product.read().clone();
    let price_txt = GroupedPriceFormatter::default().format_price(&price.to_string());
    let in_cart = cart.state().quantity_of(&id);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                height: 320px;
                box-sizing: border-box;
            ",
            ProductImage { image_url: image_url.unwrap_or_default(), name: name.clone() }
            // TITLE
            div {
                style: "
                    font-size: 18px;
                    line-height: 26px;
                    font-weight: 500;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                title: "{name}",
                "{name}"
            }
            // DESCRIPTION
            div {
                style: "
                    font-size: 14px;
                    line-height: 20px;
                    color: rgba(0, 0, 0, 0.7);
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    flex: 1;
                ",
                "{description}"
            }
            // PRICE - CART BUTTON
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    gap: 8px;
                ",
                span { style: "font-size: 18px; font-weight: 600; color: #4F46E5;", "{price_txt}" }
                AddToCartButton { product, in_cart }
            }
        }
    }
}

#[component]
fn ProductImage(image_url: String, name: String) -> Element {
    rsx! {
        div {
            style: "
                height: 120px;
                border-radius: 6px;
                background: #F5F6F8;
                display: flex;
                align-items: center;
                justify-content: center;
                overflow: hidden;
                flex-shrink: 0;
            ",
            if image_url.is_empty() {
                Icon { icon: MdShoppingCart, style: "width: 48px; height: 48px; color: rgba(0,0,0,0.2);" }
            } else {
                img { src: "{image_url}", alt: "{name}", style: "max-height: 100%; max-width: 100%;" }
            }
        }
    }
}

#[component]
fn AddToCartButton(product: ReadSignal<Product>, in_cart: u32) -> Element {
    let cart = use_cart();
    rsx! {
        button {
            title: "Add to cart",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                height: 34px;
                padding: 0 10px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                font-size: 14px;
            ",
            onclick: move |_| {
                cart.add(&product.read(), 1);
            },
            Icon { icon: MdAddShoppingCart, style: "width: 20px; height: 20px;" }
            if in_cart > 0 {
                "{in_cart}"
            }
        }
    }
}
