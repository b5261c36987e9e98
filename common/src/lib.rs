//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod document_descriptor;
pub mod document_render;
pub mod pagination;
pub mod viewer_const;
