//! Left sidebar with the category, brand, price and sort controls.

use dioxus::prelude::*;
use common::{filter_state::FilterField, search_const::SORT_MODES};
use dioxus_free_icons::{Icon, icons::md_content_icons::MdClear};

use crate::{
    api::search_api::list_catalog_facets,
    components::error_boundary::ComponentErrorDisplay,
    data_definitions::search_filter_control::use_search_filters,
};


#[component]
pub fn FilterSidebar() -> Element {
    let control = use_search_filters();
    let facets = use_resource(list_catalog_facets).suspend()?.cloned();
    let facets = match facets {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Ok(f) => f,
    };
    let category_options = facets.categories.iter().map(|c| (c.id.clone(), c.name.clone())).collect::<Vec<_>>();
    let brand_options = facets.brands.iter().map(|b| (b.id.clone(), b.name.clone())).collect::<Vec<_>>();
    let sort_options = SORT_MODES.iter().map(|(v, l)| (v.to_string(), l.to_string())).collect::<Vec<_>>();

    rsx! {
        div {
            id: "x-filter-sidebar-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                padding: 16px;
            ",
            FilterSelect { label: "Category".to_string(), field: FilterField::Category, options: category_options, any_label: "All categories".to_string() }
            FilterSelect { label: "Brand".to_string(), field: FilterField::Brand, options: brand_options, any_label: "All brands".to_string() }
            PriceRangeInputs {}
            FilterSelect { label: "Sort by".to_string(), field: FilterField::SortBy, options: sort_options, any_label: String::new() }

            button {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    height: 36px;
                    border-radius: 8px;
                    background: white;
                    border: 1px solid rgba(0,0,0,0.3);
                    cursor: pointer;
                    font-size: 15px;
                ",
                onclick: move |_| control.clear(),
                Icon { icon: MdClear, style: "width: 18px; height: 18px;" }
                "Clear filters"
            }
        }
    }
}

#[component]
fn FilterSelect(label: String, field: FilterField, options: Vec<(String, String)>, any_label: String) -> Element {
    let control = use_search_filters();
    let selected = control.filters.read().field_value(field);

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: rgb(75, 87, 112);",
            "{label}"
            select {
                style: "height: 34px; border-radius: 6px; border: 1px solid rgba(0,0,0,0.3); font-size: 15px; background: white;",
                onchange: move |event: Event<FormData>| {
                    control.set_field(field, event.value());
                },
                if !any_label.is_empty() {
                    option { value: "", selected: selected.is_empty(), "{any_label}" }
                }
                for (value, name) in options {
                    option {
                        key: "{value}",
                        selected: value == selected,
                        value: "{value}",
                        "{name}"
                    }
                }
            }
        }
    }
}

#[component]
fn PriceRangeInputs() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: rgb(75, 87, 112);",
            "Price"
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                PriceBoundInput { field: FilterField::MinPrice, placeholder: "Min".to_string() }
                "-"
                PriceBoundInput { field: FilterField::MaxPrice, placeholder: "Max".to_string() }
            }
        }
    }
}

/// Commits on Enter or when the input loses focus, so typing does not navigate on every key.
#[component]
fn PriceBoundInput(field: FilterField, placeholder: String) -> Element {
    let control = use_search_filters();
    let filters = control.filters;
    let mut typed = use_signal(|| filters.read().field_value(field));
    use_effect(move || {
        typed.set(filters.read().field_value(field));
    });
    let commit = move |_: ()| {
        let value = typed.read().trim().to_string();
        if value != filters.peek().field_value(field) {
            control.set_field(field, value);
        }
    };

    rsx! {
        input {
            r#type: "number",
            min: "0",
            placeholder: "{placeholder}",
            style: "width: 100px; height: 30px; border-radius: 6px; border: 1px solid rgba(0,0,0,0.3); padding: 0 6px; font-size: 15px;",
            value: "{typed}",
            oninput: move |event: Event<FormData>| typed.set(event.value()),
            onkeydown: move |event: Event<KeyboardData>| {
                if event.key() == Key::Enter {
                    commit(());
                }
            },
            onblur: move |_| commit(()),
        }
    }
}
