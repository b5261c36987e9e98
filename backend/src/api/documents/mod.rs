pub mod get_document_content;
pub mod get_document_render;
