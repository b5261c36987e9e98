//! Descriptor for a viewable document.

use serde::{Deserialize, Serialize};

use crate::viewer_const::DEFAULT_DOWNLOAD_FILENAME;

/// Identifies one document for the viewer.
///
/// `file` is consumed opaquely: the backend decides whether it is a path
/// under the documents root or an http(s) URL. `title` is display text and
/// seeds the suggested download filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub file: String,
    pub title: String,
}

impl DocumentDescriptor {
    pub fn new(file: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            title: title.into(),
        }
    }

    /// Filename suggested to the browser when downloading the source file.
    pub fn suggested_filename(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            DEFAULT_DOWNLOAD_FILENAME.to_string()
        } else {
            title.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_filename_uses_title() {
        let descriptor = DocumentDescriptor::new("reports/q3.pdf", "Q3 Report.pdf");
        assert_eq!(descriptor.suggested_filename(), "Q3 Report.pdf");
    }

    #[test]
    fn suggested_filename_falls_back_when_title_is_empty() {
        let descriptor = DocumentDescriptor::new("reports/q3.pdf", "");
        assert_eq!(descriptor.suggested_filename(), DEFAULT_DOWNLOAD_FILENAME);

        let descriptor = DocumentDescriptor::new("reports/q3.pdf", "   ");
        assert_eq!(descriptor.suggested_filename(), DEFAULT_DOWNLOAD_FILENAME);
    }
}
