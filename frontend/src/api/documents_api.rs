//! Client API calls for document endpoints.

use common::document_render::DocumentInfo;
use dioxus::prelude::*;




#[server]
pub async fn get_document_info(file: String) -> Result<DocumentInfo, ServerFnError> {
    let x = backend::api::documents::get_document_render::get_document_info(file).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_page_html(file: String, page_number: u32) -> Result<String, ServerFnError> {
    let x = backend::api::documents::get_document_render::get_page_html(file, page_number).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
