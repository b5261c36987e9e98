//! Paginated document viewer widget.
//!
//! Owns the page navigation state, the measured container width and the
//! fullscreen flag; everything below it (toolbar, page-index strip, page
//! view, fullscreen overlay) reads those through [`ViewerControl`].

use common::document_descriptor::DocumentDescriptor;
use common::document_render::DocumentInfo;
use common::pagination::PageNavigator;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::documents_api::get_document_info;
use crate::platform::download;
use crate::platform::dom;
use crate::platform::fullscreen;
use crate::platform::listeners::DomEventListener;

pub mod fullscreen_overlay;
pub mod page_index_strip;
pub mod page_view;
pub mod toolbar;

use fullscreen_overlay::FullscreenNavOverlay;
use page_index_strip::PageIndexStrip;
use page_view::PageView;
use toolbar::ViewerToolbar;

/// Id of the container element; fullscreen requests and width
/// measurements resolve it through the DOM.
pub(crate) const VIEWER_CONTAINER_ID: &str = "x-document-viewer-container";

/// Shared handle to the viewer state, provided as context to the
/// sub-components.
#[derive(Copy, Clone)]
pub struct ViewerControl {
    pub descriptor: ReadSignal<DocumentDescriptor>,
    pub navigator: ReadSignal<PageNavigator>,
    pub document_info: ReadSignal<Option<Result<DocumentInfo, ServerFnError>>>,
    pub container_width: ReadSignal<f64>,
    pub is_fullscreen: ReadSignal<bool>,
    pub go_to_prev: Callback<()>,
    pub go_to_next: Callback<()>,
    pub go_to_page: Callback<u32>,
    pub toggle_fullscreen: Callback<()>,
    pub download: Callback<()>,
}

#[component]
pub fn DocumentViewer(document: ReadSignal<DocumentDescriptor>) -> Element {
    let mut navigator_state = use_signal(PageNavigator::new);
    let mut container_width = use_signal(|| 0.0f64);
    let mut is_fullscreen = use_signal(|| false);

    let document_info = use_resource(move || {
        let file = document.read().file.clone();
        async move { get_document_info(file).await }
    });

    // load handler: a freshly loaded document always lands on page 1
    use_effect(move || {
        if let Some(Ok(info)) = document_info.read().clone() {
            tracing::info!("Document loaded with {} pages", info.num_pages);
            navigator_state.write().document_loaded(info.num_pages);
        }
    });

    let go_to_prev = use_callback(move |_: ()| {
        navigator_state.write().go_to_prev();
    });
    let go_to_next = use_callback(move |_: ()| {
        navigator_state.write().go_to_next();
    });
    let go_to_page = use_callback(move |page: u32| {
        navigator_state.write().go_to_page(page);
    });

    let toggle_fullscreen = use_callback(move |_: ()| {
        if *is_fullscreen.read() {
            fullscreen::exit();
        } else {
            fullscreen::enter(VIEWER_CONTAINER_ID);
        }
    });

    let download = use_callback(move |_: ()| {
        let descriptor = document.read().clone();
        download::trigger_download(&descriptor);
        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "Document download started.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("The document is being downloaded to your computer.")
                .duration(std::time::Duration::from_secs(15))
                .permanent(false),
        );
    });

    // first width measurement; effects only run on the client
    use_effect(move || {
        if let Some(width) = dom::element_width(VIEWER_CONTAINER_ID) {
            container_width.set(width);
        }
    });

    // Global listeners live exactly as long as the widget is mounted:
    // window resize re-measures, arrow keys page, fullscreen-change keeps
    // the flag true to the platform. Dropping the hook value on unmount
    // removes every registration.
    use_hook(move || {
        let resize = DomEventListener::on_window("resize", move |_event| {
            if let Some(width) = dom::element_width(VIEWER_CONTAINER_ID) {
                container_width.set(width);
            }
        });
        let keydown = DomEventListener::on_document("keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            match event.key().as_str() {
                "ArrowLeft" => navigator_state.write().go_to_prev(),
                "ArrowRight" => navigator_state.write().go_to_next(),
                _ => {}
            }
        });
        let fullscreen_change = fullscreen::capability().change_event().and_then(|event_name| {
            DomEventListener::on_document(event_name, move |_event| {
                is_fullscreen.set(fullscreen::is_fullscreen(VIEWER_CONTAINER_ID));
            })
        });
        std::rc::Rc::new((resize, keydown, fullscreen_change))
    });

    use_context_provider(move || ViewerControl {
        descriptor: document,
        navigator: navigator_state.into(),
        document_info: document_info.into(),
        container_width: container_width.into(),
        is_fullscreen: is_fullscreen.into(),
        go_to_prev,
        go_to_next,
        go_to_page,
        toggle_fullscreen,
        download,
    });

    rsx! {
        div {
            id: "{VIEWER_CONTAINER_ID}",
            style: "
                position: relative;
                display: flex;
                flex-direction: column;
                height: 100%;
                width: 100%;
                overflow: hidden;
                background: white;
            ",
            // element resize observation; the window listener covers
            // layout changes that do not fire it
            onresize: move |event| {
                let Ok(size) = event.data().clone().get_border_box_size() else {
                    tracing::error!("Failed to get border box size: {:#?}", event.data());
                    return;
                };
                container_width.set(size.width as f64);
            },

            ViewerToolbar {}
            PageIndexStrip {}
            div {
                style: "flex-grow: 1; width: 100%; overflow: auto;",
                PageView {}
            }
            if *is_fullscreen.read() {
                FullscreenNavOverlay {}
            }
        }
    }
}
