//! Contract types for the external document rendering service.

use serde::{Deserialize, Serialize};

/// Response of the document-to-HTML rendering service: one HTML fragment
/// per page, shared stylesheets, and the page geometry in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub pages: Vec<String>,
    pub styles: Vec<String>,
    pub page_width_px: f32,
    pub page_height_px: f32,
}

impl RenderedDocument {
    pub fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            num_pages: self.pages.len() as u32,
            page_width_px: self.page_width_px,
            page_height_px: self.page_height_px,
        }
    }

    /// Self-contained HTML for one page (1-based), stylesheets included.
    /// `None` when the page number is out of range.
    pub fn page_html(&self, page_number: u32) -> Option<String> {
        if page_number == 0 {
            return None;
        }
        let page = self.pages.get(page_number as usize - 1)?;
        let styles = self.styles.join("\n");
        Some(format!("{styles}\n{page}"))
    }
}

/// Load-success payload consumed by the viewer widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub num_pages: u32,
    pub page_width_px: f32,
    pub page_height_px: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_page_document() -> RenderedDocument {
        RenderedDocument {
            pages: vec!["<p>one</p>".into(), "<p>two</p>".into(), "<p>three</p>".into()],
            styles: vec!["<style>p { margin: 0; }</style>".into()],
            page_width_px: 612.0,
            page_height_px: 792.0,
        }
    }

    #[test]
    fn document_info_counts_pages() {
        let doc = three_page_document();
        let info = doc.document_info();
        assert_eq!(info.num_pages, 3);
        assert_eq!(info.page_width_px, 612.0);
        assert_eq!(info.page_height_px, 792.0);
    }

    #[test]
    fn page_html_joins_styles_and_page() {
        let doc = three_page_document();
        let html = doc.page_html(2).expect("page 2 exists");
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("<p>two</p>"));
    }

    #[test]
    fn page_html_rejects_out_of_range_pages() {
        let doc = three_page_document();
        assert_eq!(doc.page_html(0), None);
        assert_eq!(doc.page_html(4), None);
    }
}
