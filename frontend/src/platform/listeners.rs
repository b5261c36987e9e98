//! Scoped global event listeners.
//!
//! A `DomEventListener` registers itself on construction and removes the
//! registration again on drop. Components hold one in `use_hook` state,
//! which scopes the listener to their mounted lifetime: repeated
//! mount/unmount cycles never accumulate handlers.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;

#[cfg(target_arch = "wasm32")]
pub struct DomEventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl DomEventListener {
    /// Listens on the window. `None` when no window exists.
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::register(window.into(), event, handler))
    }

    /// Listens on the document. `None` when no document exists.
    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::register(document.into(), event, handler))
    }

    fn register(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok();
        Self {
            target,
            event,
            closure,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for DomEventListener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .ok();
    }
}

// Server-side rendering never registers anything.
#[cfg(not(target_arch = "wasm32"))]
pub struct DomEventListener;

#[cfg(not(target_arch = "wasm32"))]
impl DomEventListener {
    pub fn on_window(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let _ = (event, handler);
        None
    }

    pub fn on_document(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let _ = (event, handler);
        None
    }
}
