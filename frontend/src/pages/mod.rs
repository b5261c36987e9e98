pub mod home_page;
pub mod view_document_page;
