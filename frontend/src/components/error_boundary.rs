//! Error boundaries for the viewer.
//!
//! Two tiers: a whole-app boundary that replaces the page when routing or
//! setup blows up, and a per-component boundary that keeps the toolbar
//! alive when only the page content fails.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; padding: 40px;",
                        h1 {
                            style: "color: darkred; font-size: 42px; margin: 10px;",
                            "PageTurn hit an unexpected error"
                        }
                        p {
                            style: "color: #555; font-size: 20px; margin: 5px;",
                            "Failed in: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: blue; font-size: 20px; margin: 15px;",
                            "Open another document"
                        }
                        pre {
                            style: "color: black; border: 1px solid darkred; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto; max-width: 700px;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Wraps one piece of the viewer so a render failure there does not take
/// down the surrounding chrome.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Unknown error".to_string()
                };
                rsx! {
                    ViewerErrorDisplay {
                        error_txt,
                        button {
                            class: "pageturn-hover-shadow-background",
                            style: "color: blue; font-size: 20px; border: 1px solid blue; padding: 8px 16px; border-radius: 5px; margin: 15px; background: white; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Retry"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ViewerErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color: darkred; font-size: 28px; margin: 5px;",
                "This document could not be displayed"
            }

            pre {
                style: "color: darkred; border: 1px solid darkred; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
