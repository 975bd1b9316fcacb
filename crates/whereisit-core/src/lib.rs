//! Navigation and cross-view coordination for the whereisit inventory UI.
//!
//! This crate holds everything that does not need a DOM:
//!
//! - [`MountConfig`] and [`PathResolver`] - mount-prefix aware path rewriting
//! - [`Route`] - logical application paths
//! - [`Endpoints`] - backend URL catalogue
//! - [`NavigationController`] - verified in-page navigation with hard fallback
//! - [`SearchCoordinator`] - text + category search state
//! - [`DetailMediator`] - the shared item detail surface broker
//!
//! Browser access sits behind the [`Browser`], [`SearchBackend`] and
//! [`DetailSurface`] traits; the web crate supplies the DOM implementations.

pub mod api;
pub mod detail;
pub mod error;
pub mod models;
pub mod mount;
pub mod navigation;
pub mod path;
pub mod route;
pub mod search;

pub use api::Endpoints;
pub use detail::{DetailMediator, DetailSurface, SessionId, ViewToken};
pub use error::{DetailError, FetchError, MountError, NavigationError};
pub use models::{BoxRef, Item, SearchResults, StorageBox, Unit};
pub use mount::MountConfig;
pub use navigation::{Browser, NavigationController, NavigationOutcome, VerifyDelay};
pub use path::PathResolver;
pub use route::{BoxKey, Route};
pub use search::{MIN_QUERY_CHARS, SearchBackend, SearchCoordinator, SearchOutcome, SearchState};
