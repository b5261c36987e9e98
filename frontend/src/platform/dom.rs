//! Small DOM lookups used by the viewer.

#[cfg(target_arch = "wasm32")]
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_by_id(_id: &str) -> Option<web_sys::Element> {
    None
}

/// Current width in CSS pixels of the element with the given id.
pub fn element_width(id: &str) -> Option<f64> {
    let element = element_by_id(id)?;
    Some(element.get_bounding_client_rect().width())
}
