//! Toolbar for the document viewer: title, page controls, download and
//! fullscreen actions.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertDriveFile, md_file_icons::MdFileDownload, md_navigation_icons::{MdArrowBack, MdArrowForward, MdFullscreen, MdFullscreenExit}}};
use dioxus_primitives::{ContentAlign, ContentSide};

use crate::components::hover_card::{HoverCard, HoverCardContent, HoverCardTrigger};

use super::ViewerControl;

#[component]
pub fn ViewerToolbar() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                justify-content: space-between;
                height: 54px;
                width: 100%;
                background-color:#F8FCFF;
                flex-shrink: 0;
                flex-grow: 0;
                border-bottom: 1px solid rgba(0, 0, 0, 0.3);
            ",
            // TITLE
            TitleSection {}
            // SPACER
            div {
                style:"flex-grow: 1;"
            }
            // PAGE CONTROLS
            PaginationControls {}
            // SPACER
            div {
                style:"flex-grow: 1;"
            }
            // ACTION BUTTONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 6px;
                    align-items: center;
                    justify-content: center;
                    padding-right: 6px;
                ",
                DownloadButton {}
                FullscreenToggleButton {}
            }
        }
    }
}

#[component]
fn TitleSection() -> Element {
    let control = use_context::<ViewerControl>();
    let descriptor = control.descriptor;
    let title = use_memo(move || descriptor.read().suggested_filename());
    rsx! {
        div {
            style: "
                flex-grow: 0;
                flex-shrink: 0;
                max-width: calc(100% - 360px);
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding-left: 12px;
                font-size: 20px;
                font-weight: 400;
            ",
            div {
                style: "
                    width: 24px;
                    height: 24px;
                    color: rgba(0, 0, 0, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                ",
                Icon {
                    icon: MdInsertDriveFile,
                    style: "width: 18px; height: 18px;"
                }
            }
            div {
                style: "text-overflow: ellipsis; overflow: hidden; white-space: nowrap;",
                "{title}"
            }
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let control = use_context::<ViewerControl>();
    let navigator = control.navigator;
    let page_counter = use_memo(move || {
        let nav = *navigator.read();
        if nav.num_pages() == 0 {
            "- / -".to_string()
        } else {
            format!("{} / {}", nav.current_page(), nav.num_pages())
        }
    });
    let disable_prev = use_memo(move || !navigator.read().has_prev());
    let disable_next = use_memo(move || !navigator.read().has_next());
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: disable_prev,
                onclick: move |_| { control.go_to_prev.call(()); }
            }
            div {
                style: "
                    min-width: 70px;
                    text-align: center;
                    font-size: 20px;
                    line-height: 28px;
                    font-weight: 400;
                ",
                "{page_counter}"
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: disable_next,
                onclick: move |_| { control.go_to_next.call(()); }
            }
        }
    }
}

#[component]
fn DownloadButton() -> Element {
    let control = use_context::<ViewerControl>();
    rsx! {
        button {
            style: "
                width: 40px;
                height: 40px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 24px;
                padding: 1px;
                margin: 1px;
            ",
            class: "pageturn-hover-shadow-background",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                control.download.call(());
            },
            Icon {
                icon: MdFileDownload,
                style: "width: 24px; height: 24px;"
            }
        }
    }
}

#[component]
fn FullscreenToggleButton() -> Element {
    let control = use_context::<ViewerControl>();
    let is_fullscreen = control.is_fullscreen;
    rsx! {
        button {
            style: "
                width: 40px;
                height: 40px;
                cursor: pointer;
                border: 1px solid #000;
                border-radius: 8px;
                background: white;
                color: black;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 24px;
                padding: 1px;
                margin: 1px;
            ",
            class: "pageturn-hover-shadow-background",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                control.toggle_fullscreen.call(());
            },
            if *is_fullscreen.read() {
                Icon {
                    icon: MdFullscreenExit,
                    style: "width: 24px; height: 24px;"
                }
            } else {
                Icon {
                    icon: MdFullscreen,
                    style: "width: 24px; height: 24px;"
                }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let tooltip_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.6)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        HoverCard {
            HoverCardTrigger {
                button {
                    disabled: *disabled.read(),
                    style: "
                        width: 32px;
                        height: 32px;
                        background: white;
                        border-radius: 8px;
                        padding: 4px;
                        box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                        cursor: {btn_cursor};
                    ",
                    onclick: move |_| {
                        if !*disabled.read() {
                            onclick(());
                        }
                    },
                    Icon { icon: icon, style: "width: 26px; height: 26px; color: {btn_color};" }
                },

            },
            HoverCardContent {
                side: ContentSide::Bottom,
                align: ContentAlign::Center,
                div {
                    style: "
                        color:{tooltip_color};
                        background-color:white;
                        padding:10px;
                        border-radius:5px;
                        border: 1px solid black;
                        width: fit-content;
                    ",
                    "{label}",
                }
            }
        }
    }
}
