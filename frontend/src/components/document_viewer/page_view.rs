//! Renders the current page, scaled to the tracked container width.

use dioxus::prelude::*;

use crate::api::documents_api::get_page_html;
use crate::components::suspend_boundary::LoadingIndicator;

use super::ViewerControl;

// Whitespace the rendering service leaves around each page.
const PAGE_MARGIN_PX: f64 = 60.0;

#[component]
pub fn PageView() -> Element {
    let control = use_context::<ViewerControl>();
    let descriptor = control.descriptor;
    let navigator = control.navigator;

    let page_html = use_resource(move || {
        let file = descriptor.read().file.clone();
        let page_number = navigator.read().current_page();
        async move { get_page_html(file, page_number).await }
    });

    let page_size = use_memo(move || match control.document_info.read().clone() {
        Some(Ok(info)) => Some((info.page_width_px, info.page_height_px)),
        _ => None,
    });

    match page_html.read().clone() {
        Some(Ok(html)) => {
            let Some((page_width_px, page_height_px)) = page_size() else {
                return rsx! {
                    LoadingIndicator { label: "Measuring document..." }
                };
            };
            rsx! {
                ScaledPage { html, page_width_px, page_height_px }
            }
        }
        Some(Err(e)) => {
            return rsx! {
                pre {
                    style: "color:red; font-size: 26px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                    "{e:#?}"
                }
            }
        }
        None => {
            return rsx! {
                LoadingIndicator { label: "Loading page..." }
            }
        }
    }
}

#[component]
fn ScaledPage(html: ReadSignal<String>, page_width_px: f32, page_height_px: f32) -> Element {
    let control = use_context::<ViewerControl>();
    let container_width = control.container_width;

    let frame_width = page_width_px as f64 + PAGE_MARGIN_PX;
    let frame_height = page_height_px as f64 + PAGE_MARGIN_PX;
    let aspect_ratio = frame_width / frame_height;
    let scale_factor = use_memo(move || {
        let width = *container_width.read();
        if width <= 0.0 {
            return 1.0;
        }
        width / frame_width
    });

    rsx! {
        div {
            style: "transform: scale({scale_factor}); transform-origin: top left;",
            iframe {
                srcdoc: "{html}",
                style: "width: {frame_width}px; height: {frame_height}px; aspect-ratio: {aspect_ratio}; border: none; background: white;",
            }
        }
    }
}
