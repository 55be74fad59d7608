//! Loading placeholder around components that suspend on server data.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            // shown while a child waits on a server function
            fallback: |_: SuspenseContext| rsx! {
                div {
                    style: "display: flex; width: 100%; height: 100%; align-items: center; justify-content: center;",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary { {children} }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                margin: 16px;
                padding: 10px 18px;
                border-radius: 8px;
                background: white;
                border: 1px solid #E5E7EB;
                color: rgb(75, 87, 112);
                font-size: 18px;
            ",
            "Loading products..."
        }
    }
}
