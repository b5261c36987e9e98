//! Anchor-based file download.
//!
//! The browser owns the actual transfer; this module only points it at
//! the download endpoint with a suggested filename.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::document_descriptor::DocumentDescriptor;

/// Download endpoint URL for a document. Both the file reference and the
/// suggested filename are base64 encoded so each always fits in exactly
/// one path segment, whatever characters the document title carries
/// (see `backend::server_extra::download_document`).
pub fn download_href(descriptor: &DocumentDescriptor) -> String {
    let document = URL_SAFE_NO_PAD.encode(descriptor.file.as_bytes());
    let filename = URL_SAFE_NO_PAD.encode(descriptor.suggested_filename().as_bytes());
    format!("/_download_document/{}/{}", document, filename)
}

/// Synthesizes a transient anchor pointing at the download endpoint and
/// clicks it. No-op outside the browser.
#[cfg(target_arch = "wasm32")]
pub fn trigger_download(descriptor: &DocumentDescriptor) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(&download_href(descriptor));
    anchor.set_download(&descriptor.suggested_filename());
    let Some(body) = document.body() else {
        return;
    };
    let node: &web_sys::Node = anchor.as_ref();
    body.append_child(node).ok();
    anchor.click();
    anchor.remove();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(_descriptor: &DocumentDescriptor) {}

#[cfg(test)]
mod tests {
    use super::*;
    use common::viewer_const::DEFAULT_DOWNLOAD_FILENAME;

    #[test]
    fn href_encodes_the_file_reference_as_one_segment() {
        let descriptor = DocumentDescriptor::new("reports/2026/q3.pdf", "Q3.pdf");
        let href = download_href(&descriptor);
        let document = URL_SAFE_NO_PAD.encode("reports/2026/q3.pdf".as_bytes());
        let filename = URL_SAFE_NO_PAD.encode("Q3.pdf".as_bytes());
        assert_eq!(href, format!("/_download_document/{}/{}", document, filename));
        assert!(!document.contains('/'));
    }

    #[test]
    fn href_keeps_awkward_titles_inside_one_segment() {
        // Slashes would add path segments, ? and # would end the path.
        let descriptor = DocumentDescriptor::new("a.pdf", "A/B test #3?.pdf");
        let href = download_href(&descriptor);
        let tail = href.strip_prefix("/_download_document/").unwrap();
        assert_eq!(tail.matches('/').count(), 1);
        assert!(!href.contains('#'));
        assert!(!href.contains('?'));
        let filename = tail.split('/').nth(1).unwrap();
        let decoded = URL_SAFE_NO_PAD.decode(filename.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "A/B test #3?.pdf");
    }

    #[test]
    fn href_falls_back_to_the_default_filename() {
        let descriptor = DocumentDescriptor::new("a.pdf", "");
        let href = download_href(&descriptor);
        let encoded = URL_SAFE_NO_PAD.encode(DEFAULT_DOWNLOAD_FILENAME.as_bytes());
        assert!(href.ends_with(&format!("/{}", encoded)));
    }
}
