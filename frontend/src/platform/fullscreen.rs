//! Fullscreen as one runtime-detected capability.
//!
//! The standard and the webkit/moz/ms prefixed fullscreen APIs are
//! modeled as a single capability with a runtime-selected variant.
//! `Unsupported` is a valid variant: every operation is then a silent
//! no-op.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use crate::platform::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenCapability {
    Standard,
    Webkit,
    Moz,
    Ms,
    Unsupported,
}

impl FullscreenCapability {
    fn request_method(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("requestFullscreen"),
            Self::Webkit => Some("webkitRequestFullscreen"),
            Self::Moz => Some("mozRequestFullScreen"),
            Self::Ms => Some("msRequestFullscreen"),
            Self::Unsupported => None,
        }
    }

    fn exit_method(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("exitFullscreen"),
            Self::Webkit => Some("webkitExitFullscreen"),
            Self::Moz => Some("mozCancelFullScreen"),
            Self::Ms => Some("msExitFullscreen"),
            Self::Unsupported => None,
        }
    }

    fn element_property(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("fullscreenElement"),
            Self::Webkit => Some("webkitFullscreenElement"),
            Self::Moz => Some("mozFullScreenElement"),
            Self::Ms => Some("msFullscreenElement"),
            Self::Unsupported => None,
        }
    }

    /// Name of the fullscreen-change event paired with this variant.
    pub fn change_event(self) -> Option<&'static str> {
        match self {
            Self::Standard => Some("fullscreenchange"),
            Self::Webkit => Some("webkitfullscreenchange"),
            Self::Moz => Some("mozfullscreenchange"),
            Self::Ms => Some("MSFullscreenChange"),
            Self::Unsupported => None,
        }
    }
}

/// The capability of the host environment, detected once per session.
#[cfg(target_arch = "wasm32")]
pub fn capability() -> FullscreenCapability {
    thread_local! {
        static DETECTED: std::cell::OnceCell<FullscreenCapability> =
            const { std::cell::OnceCell::new() };
    }
    DETECTED.with(|cell| *cell.get_or_init(detect))
}

#[cfg(target_arch = "wasm32")]
fn detect() -> FullscreenCapability {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    let Some(root) = root else {
        return FullscreenCapability::Unsupported;
    };
    let candidates = [
        FullscreenCapability::Standard,
        FullscreenCapability::Webkit,
        FullscreenCapability::Moz,
        FullscreenCapability::Ms,
    ];
    for candidate in candidates {
        let Some(method) = candidate.request_method() else {
            continue;
        };
        let is_function = js_sys::Reflect::get(root.as_ref(), &JsValue::from_str(method))
            .map(|value| value.is_function())
            .unwrap_or(false);
        if is_function {
            return candidate;
        }
    }
    FullscreenCapability::Unsupported
}

#[cfg(not(target_arch = "wasm32"))]
pub fn capability() -> FullscreenCapability {
    FullscreenCapability::Unsupported
}

#[cfg(target_arch = "wasm32")]
fn call_js_method(target: &JsValue, method: &str) {
    let Ok(function) = js_sys::Reflect::get(target, &JsValue::from_str(method)) else {
        return;
    };
    let Some(function) = function.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let _ = function.call0(target);
}

/// Requests fullscreen on the viewer container.
#[cfg(target_arch = "wasm32")]
pub fn enter(container_id: &str) {
    let Some(method) = capability().request_method() else {
        return;
    };
    let Some(element) = dom::element_by_id(container_id) else {
        return;
    };
    call_js_method(element.as_ref(), method);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn enter(_container_id: &str) {}

/// Leaves fullscreen, whichever element holds it.
#[cfg(target_arch = "wasm32")]
pub fn exit() {
    let Some(method) = capability().exit_method() else {
        return;
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    call_js_method(document.as_ref(), method);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn exit() {}

/// The element currently occupying fullscreen, if any.
#[cfg(target_arch = "wasm32")]
pub fn fullscreen_element() -> Option<web_sys::Element> {
    let property = capability().element_property()?;
    let document = web_sys::window()?.document()?;
    let value = js_sys::Reflect::get(document.as_ref(), &JsValue::from_str(property)).ok()?;
    value.dyn_into::<web_sys::Element>().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fullscreen_element() -> Option<web_sys::Element> {
    None
}

/// Whether the given container is the active fullscreen element.
pub fn is_fullscreen(container_id: &str) -> bool {
    let Some(active) = fullscreen_element() else {
        return false;
    };
    let Some(container) = dom::element_by_id(container_id) else {
        return false;
    };
    let active: &web_sys::Node = active.as_ref();
    container.is_same_node(Some(active))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_variant_has_a_complete_method_set() {
        for capability in [
            FullscreenCapability::Standard,
            FullscreenCapability::Webkit,
            FullscreenCapability::Moz,
            FullscreenCapability::Ms,
        ] {
            assert!(capability.request_method().is_some());
            assert!(capability.exit_method().is_some());
            assert!(capability.element_property().is_some());
            assert!(capability.change_event().is_some());
        }
    }

    #[test]
    fn unsupported_variant_has_no_methods() {
        let capability = FullscreenCapability::Unsupported;
        assert_eq!(capability.request_method(), None);
        assert_eq!(capability.exit_method(), None);
        assert_eq!(capability.element_property(), None);
        assert_eq!(capability.change_event(), None);
    }

    #[test]
    fn outside_the_browser_everything_degrades_to_noop() {
        assert_eq!(capability(), FullscreenCapability::Unsupported);
        enter("x-any-container");
        exit();
        assert!(fullscreen_element().is_none());
        assert!(!is_fullscreen("x-any-container"));
    }
}
