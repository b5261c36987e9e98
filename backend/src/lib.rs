//! Server-side library for the document viewer: resolves document
//! references to byte streams, talks to the external rendering service,
//! and serves file downloads.

pub mod api;
pub mod server_extra;
