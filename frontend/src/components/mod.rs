pub mod document_viewer;
pub mod error_boundary;
pub mod hover_card;
pub mod suspend_boundary;
