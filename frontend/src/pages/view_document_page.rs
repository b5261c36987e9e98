use common::document_descriptor::DocumentDescriptor;
use dioxus::prelude::*;

use crate::{
    components::{document_viewer::DocumentViewer, suspend_boundary::SuspendWrapper},
    data_definitions::url_param::UrlParam,
};


/// View document page
#[component]
pub fn ViewDocumentPage(document: UrlParam<DocumentDescriptor>) -> Element {
    let document = document.0.clone();
    rsx! {
        Title { "PageTurn - View Document" }
        div {
            style: "height: 100vh; width: 100vw; overflow: hidden;",
            SuspendWrapper {
                DocumentViewer { document }
            }
        }
    }
}
