//! Error boundaries: a page-level one with a way home, and a per-component one with retry.

use dioxus::{logger::tracing::error, prelude::*};

const ERROR_BOX_STYLE: &str = "
    border: 1px solid #FCA5A5;
    background: #FEF2F2;
    border-radius: 8px;
    padding: 10px 14px;
    margin: 10px;
";

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                error!("render error in boundary {}: {:?}", boundary_name.peek(), err);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; padding: 30px;",
                        h1 { style: "color: #B91C1C; font-size: 40px; font-weight: 500; margin: 10px;", "Something went wrong" }
                        p { style: "color: #7F1D1D; font-size: 18px; margin: 10px;", "in {boundary_name}" }
                        a {
                            href: "/",
                            style: "color: #4F46E5; font-size: 20px; margin: 10px;",
                            "Back to the storefront"
                        }
                        pre { style: "{ERROR_BOX_STYLE} text-wrap: auto;", "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |ctx: ErrorContext| {
                let error_txt = match ctx.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                error!("component error: {error_txt}");
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "
                                margin: 10px;
                                padding: 6px 16px;
                                border-radius: 8px;
                                border: 1px solid #4F46E5;
                                background: white;
                                color: #4F46E5;
                                font-size: 16px;
                                cursor: pointer;
                            ",
                            onclick: move |_| ctx.clear_errors(),
                            "Retry"
                        }
                    }
                }
            },
            div {
                style: "width: 100%; height: 100%;",
                {children}
            }
        }
    }
}

/// Inline error for a section that failed to load; `children` go under the message.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                width: 100%;
                height: 100%;
            ",
            h2 { style: "color: #B91C1C; font-size: 24px; font-weight: 500; margin: 6px;", "Could not load this section" }
            pre {
                style: "{ERROR_BOX_STYLE} color: #7F1D1D; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
