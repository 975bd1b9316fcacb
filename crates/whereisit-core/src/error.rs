//! Error types for the coordination layer.
//!
//! - [`FetchError`] - backend HTTP requests
//! - [`NavigationError`] - in-page route transitions
//! - [`DetailError`] - presenting the shared detail surface
//! - [`MountError`] - installing the process-wide mount configuration

use thiserror::Error;

/// Network/fetch-related errors for backend requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Request could not be sent (CORS, offline, aborted)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Response body was not the expected JSON
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of an in-page route transition.
///
/// Never surfaced to views; the navigation controller turns it into a
/// full-document load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Browser window not available")]
    NoWindow,
    /// The history API rejected the transition (e.g. cross-origin URL).
    #[error("router rejected transition: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    /// No detail surface is mounted yet.
    #[error("item detail surface is not mounted")]
    SurfaceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("mount configuration already installed (prefix {0:?})")]
    AlreadyInstalled(String),
}
