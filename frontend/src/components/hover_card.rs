//! Hover card used for button tooltips.

use dioxus::prelude::*;
use dioxus_primitives::{ContentAlign, ContentSide};

#[derive(Copy, Clone)]
struct HoverCardState {
    open: Signal<bool>,
}

#[component]
pub fn HoverCard(children: Element) -> Element {
    let open = use_signal(|| false);
    use_context_provider(move || HoverCardState { open });
    rsx! {
        div {
            style: "position: relative; display: inline-flex;",
            {children}
        }
    }
}

#[component]
pub fn HoverCardTrigger(children: Element) -> Element {
    let mut state = use_context::<HoverCardState>();
    rsx! {
        div {
            style: "display: inline-flex;",
            onmouseenter: move |_| {
                state.open.set(true);
            },
            onmouseleave: move |_| {
                state.open.set(false);
            },
            {children}
        }
    }
}

#[component]
pub fn HoverCardContent(side: ContentSide, align: ContentAlign, children: Element) -> Element {
    let state = use_context::<HoverCardState>();
    if !*state.open.read() {
        return rsx! {};
    }
    let side_style = match side {
        ContentSide::Top => "bottom: calc(100% + 6px);",
        ContentSide::Bottom => "top: calc(100% + 6px);",
        _ => "top: calc(100% + 6px);",
    };
    let align_style = match align {
        ContentAlign::Start => "left: 0;",
        ContentAlign::End => "right: 0;",
        _ => "left: 50%; transform: translateX(-50%);",
    };
    rsx! {
        div {
            style: "
                position: absolute;
                {side_style}
                {align_style}
                z-index: 1100;
                white-space: nowrap;
            ",
            {children}
        }
    }
}
