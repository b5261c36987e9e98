//! Home page: pick a document to view.

use common::document_descriptor::DocumentDescriptor;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertDriveFile};

use crate::routes::Route;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "PageTurn" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 18px;
                height: 100vh;
                width: 100vw;
                background-color: #F8FCFF;
            ",
            h1 {
                style: "font-size: 34px; font-weight: 300; color: rgb(75, 87, 112);",
                "PageTurn"
            }
            div {
                style: "font-size: 18px; color: rgba(0, 0, 0, 0.6);",
                "Open a document by path or URL"
            }
            OpenDocumentCard {}
        }
    }
}

#[component]
fn OpenDocumentCard() -> Element {
    let mut file = use_signal(|| "".to_string());
    let mut title = use_signal(|| "".to_string());
    let open_document = use_callback(move |_: ()| {
        let file = file.read().trim().to_string();
        if file.is_empty() {
            return;
        }
        let descriptor = DocumentDescriptor::new(file, title.read().trim().to_string());
        navigator().push(Route::view_document(descriptor));
    });
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                border-radius: 22px;
                padding: 22px;
                background: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border: 1px solid rgba(0, 0, 0, 0.5);
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 42px;
                    color: #111827;
                ",
                Icon { icon: MdInsertDriveFile, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "reports/q3.pdf or https://…",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 14px;
                    ",
                    oninput: move |e| {
                        *file.write() = e.value();
                    },
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            open_document.call(());
                        }
                    },
                }
            }
            input {
                r#type: "text",
                placeholder: "Title (used as download filename)",
                style: "
                    border: 1px solid rgba(0, 0, 0, 0.5);
                    border-radius: 9999px;
                    outline: none;
                    padding: 10px 14px;
                    font-size: 14px;
                    color: #111827;
                ",
                oninput: move |e| {
                    *title.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        open_document.call(());
                    }
                },
            }
            button {
                style: "
                    cursor: pointer;
                    border: 1px solid #000;
                    border-radius: 9999px;
                    background: #1C212D;
                    color: white;
                    font-size: 16px;
                    padding: 10px 14px;
                ",
                class: "pageturn-hover-shadow-background",
                onclick: move |_| {
                    open_document.call(());
                },
                "Open Document"
            }
        }
    }
}
