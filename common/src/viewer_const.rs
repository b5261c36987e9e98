//! Constants shared by the viewer frontend and backend.

/// Number of page buttons rendered inline in the page-index strip before
/// collapsing the tail into an ellipsis plus the final page.
pub const MAX_INLINE_PAGE_BUTTONS: u32 = 10;

/// Download filename used when a document has no usable title.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "document.pdf";
