use dioxus::prelude::*;

use common::document_descriptor::DocumentDescriptor;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::view_document_page::ViewDocumentPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {

    #[route("/")]
    HomePage {},


    #[route("/view_document/:document")]
    ViewDocumentPage { document: UrlParam<DocumentDescriptor> },

}

impl Route {
    pub fn view_document(descriptor: DocumentDescriptor) -> Self {
        Self::ViewDocumentPage {
            document: UrlParam::from(descriptor),
        }
    }
}
