//! Logical path resolution.

use std::sync::LazyLock;

use regex::Regex;

use crate::mount::{self, MountConfig};

/// Two or more slashes, unless directly preceded by `:` (scheme separator).
static DUPLICATE_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^:])/{2,}").expect("static regex is valid"));

/// Collapse runs of slashes into one, keeping `scheme://` intact.
pub fn normalize_slashes(url: &str) -> String {
    DUPLICATE_SLASHES.replace_all(url, "${1}/").into_owned()
}

/// Maps logical paths (`/box/42`) to the URLs used for navigation and API
/// calls.
///
/// Callers must pass logical paths only. Resolving an already resolved URL
/// prepends the prefix a second time; that misuse is not detected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathResolver {
    mount: Option<MountConfig>,
}

impl PathResolver {
    pub fn new(mount: Option<MountConfig>) -> Self {
        Self { mount }
    }

    /// Resolver without a mount: every path resolves to itself.
    pub fn identity() -> Self {
        Self { mount: None }
    }

    /// Resolver over the process-wide config from [`mount::install`].
    pub fn from_installed() -> Self {
        Self::new(mount::installed().cloned())
    }

    /// Resolve a logical path to a concrete URL.
    pub fn resolve(&self, logical_path: &str) -> String {
        match &self.mount {
            Some(mount) => mount.rewrite(logical_path),
            None => logical_path.to_string(),
        }
    }

    /// Inverse of [`resolve`](Self::resolve) for browser pathnames.
    pub fn logical_path(&self, pathname: &str) -> String {
        match &self.mount {
            Some(mount) => mount.strip(pathname),
            None => pathname.to_string(),
        }
    }
}
