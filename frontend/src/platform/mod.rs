//! Browser platform plumbing: DOM lookups, global event listeners,
//! the fullscreen capability and the anchor-based download trigger.
//!
//! Everything here degrades to a no-op outside the browser, so these
//! modules are safe to call from components that also render on the
//! server.

pub mod dom;
pub mod download;
pub mod fullscreen;
pub mod listeners;
