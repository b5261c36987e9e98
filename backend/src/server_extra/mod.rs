pub mod download_document;
