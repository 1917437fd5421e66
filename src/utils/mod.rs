//! Utility modules for web and DOM operations.
//!
//! - [`dom`] - window/document access, downloads, wall clock
//! - [`fetch_json`] - network fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
