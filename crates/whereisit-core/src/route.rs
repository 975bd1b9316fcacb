//! Logical application routes.
//!
//! URL format (before the mount prefix is applied):
//! - `/` - storage units and search
//! - `/search` - standalone search page
//! - `/unit/:id` - boxes of a unit
//! - `/box/:id` - items of a box; `:id` may also be the box slug printed
//!   on its QR label

use std::borrow::Cow;
use std::fmt;

use crate::path::PathResolver;

/// How a box is addressed in the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoxKey {
    Id(u64),
    Slug(String),
}

impl BoxKey {
    /// Numeric segments are ids, anything else is a slug.
    pub fn parse(segment: &str) -> Self {
        match segment.parse() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Slug(
                urlencoding::decode(segment)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| segment.to_string()),
            ),
        }
    }
}

impl From<u64> for BoxKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for BoxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Slug(slug) => f.write_str(&urlencoding::encode(slug)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Unit(u64),
    Box(BoxKey),
    /// Anything else; keeps the logical path for display.
    NotFound(String),
}

impl Route {
    /// Parse a logical path. A single trailing slash is accepted.
    pub fn parse(logical_path: &str) -> Self {
        let trimmed = logical_path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["search"] => Self::Search,
            ["unit", id] => id
                .parse()
                .map(Self::Unit)
                .unwrap_or_else(|_| Self::NotFound(logical_path.to_string())),
            ["box", key] => Self::Box(BoxKey::parse(key)),
            _ => Self::NotFound(logical_path.to_string()),
        }
    }

    /// Parse a browser pathname, stripping the mount prefix first.
    pub fn from_pathname(pathname: &str, resolver: &PathResolver) -> Self {
        Self::parse(&resolver.logical_path(pathname))
    }

    /// Canonical logical path for this route.
    pub fn logical_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Search => "/search".to_string(),
            Self::Unit(id) => format!("/unit/{}", id),
            Self::Box(key) => format!("/box/{}", key),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.logical_path())
    }
}
