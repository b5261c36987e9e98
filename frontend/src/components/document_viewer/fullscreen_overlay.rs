//! Overlay prev/next controls, rendered only while the viewer container
//! is the active fullscreen element.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdChevronLeft, MdChevronRight}};

use super::ViewerControl;

#[component]
pub fn FullscreenNavOverlay() -> Element {
    let control = use_context::<ViewerControl>();
    let navigator = control.navigator;
    let disable_prev = use_memo(move || !navigator.read().has_prev());
    let disable_next = use_memo(move || !navigator.read().has_next());
    rsx! {
        OverlayButton {
            position_style: "left: 18px;",
            disabled: disable_prev,
            onclick: move |_| { control.go_to_prev.call(()); },
            Icon {
                icon: MdChevronLeft,
                style: "width: 40px; height: 40px;"
            }
        }
        OverlayButton {
            position_style: "right: 18px;",
            disabled: disable_next,
            onclick: move |_| { control.go_to_next.call(()); },
            Icon {
                icon: MdChevronRight,
                style: "width: 40px; height: 40px;"
            }
        }
    }
}

#[component]
fn OverlayButton(position_style: String, disabled: ReadSignal<bool>, onclick: Callback<()>, children: Element) -> Element {
    let opacity = use_memo(move || if *disabled.read() { "0.3" } else { "0.9" });
    let cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            style: "
                position: absolute;
                top: 50%;
                transform: translateY(-50%);
                {position_style}
                width: 56px;
                height: 56px;
                border: 1px solid rgba(0, 0, 0, 0.5);
                border-radius: 50%;
                background: white;
                color: black;
                opacity: {opacity};
                cursor: {cursor};
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 1010;
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            {children}
        }
    }
}
