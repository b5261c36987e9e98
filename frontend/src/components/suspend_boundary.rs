use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error handling around one viewer region: suspended
/// children show the loading card, failed children show the retryable
/// error display instead of unwinding to the app boundary.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator { label: "Opening document..." }
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "color: #444; font-size: 22px; border: 1px solid #bbb; padding: 10px 18px; border-radius: 5px; margin: 15px;",
            "{label}"
        }
    }
}
