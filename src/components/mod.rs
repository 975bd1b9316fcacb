//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`views`] - One view per route
//! - [`search`] - Search panel shared by home and search views
//! - [`detail`] - Shared item detail dialog
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod detail;
pub mod icons;
pub mod router;
pub mod search;
pub mod views;

pub use router::AppRouter;
