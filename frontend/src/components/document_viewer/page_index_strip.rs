//! Page-index strip: one button per page, collapsed into an ellipsis
//! plus the final page for long documents.

use common::pagination::{PageStripEntry, page_strip};
use dioxus::prelude::*;

use super::ViewerControl;

#[component]
pub fn PageIndexStrip() -> Element {
    let control = use_context::<ViewerControl>();
    let navigator = control.navigator;
    let entries = use_memo(move || page_strip(navigator.read().num_pages()));
    if entries.read().is_empty() {
        return rsx! {};
    }

    let buttons = entries
        .read()
        .iter()
        .map(|entry| match *entry {
            PageStripEntry::Page(page) => rsx! {
                PageButton { key: "{page}", page }
            },
            PageStripEntry::Ellipsis => rsx! {
                div {
                    key: "ellipsis",
                    style: "
                        font-size: 16px;
                        color: rgba(0, 0, 0, 0.6);
                        padding: 0px 2px;
                        align-content: center;
                    ",
                    "…"
                }
            },
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 6px;
                align-items: center;
                justify-content: center;
                padding: 7px;
                width: 100%;
                background-color: rgba(0, 0, 0, 0.04);
                border-bottom: 1px solid rgba(0, 0, 0, 0.3);
                flex-shrink: 0;
                flex-grow: 0;
            ",
            {buttons.into_iter()}
        }
    }
}

#[component]
fn PageButton(page: u32) -> Element {
    let control = use_context::<ViewerControl>();
    let navigator = control.navigator;
    let is_current = use_memo(move || navigator.read().current_page() == page);
    let background = use_memo(move || if is_current() { "#1C212D" } else { "white" });
    let color = use_memo(move || if is_current() { "white" } else { "black" });
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                cursor: pointer;
                border: 1px solid rgba(0, 0, 0, 0.5);
                border-radius: 8px;
                background: {background};
                color: {color};
                font-size: 16px;
                padding: 2px 6px;
            ",
            class: "pageturn-hover-shadow-background",
            onclick: move |_| {
                control.go_to_page.call(page);
            },
            "{page}"
        }
    }
}
