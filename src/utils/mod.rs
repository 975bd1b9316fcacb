//! Browser-facing utilities.
//!
//! Provides:
//! - [`DomBrowser`] - history/location backed navigation primitives
//! - [`fetch_json`], [`HttpSearchBackend`] - network fetching with timeout
//! - [`dom`] - small DOM helpers

mod browser;
pub mod dom;
mod fetch;

pub use browser::DomBrowser;
pub use fetch::{HttpSearchBackend, fetch_json};
