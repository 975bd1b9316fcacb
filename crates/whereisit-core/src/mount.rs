//! Runtime mount prefix.
//!
//! When the app is served behind a reverse proxy or an ingress path
//! (e.g. `/api/hassio_ingress/<token>`), every route and API call has to
//! carry that prefix. The prefix is only known at runtime, so it is
//! installed once at start-up and read-only afterwards. Nothing requires
//! it to be installed: without it, paths resolve to themselves.

use std::sync::OnceLock;

use crate::error::MountError;
use crate::path::normalize_slashes;

static INSTALLED: OnceLock<MountConfig> = OnceLock::new();

/// Mount prefix the application is served under.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MountConfig {
    prefix: String,
}

impl MountConfig {
    /// Create a config for the given prefix. Surrounding whitespace is
    /// dropped; slashes are left alone and cleaned up on rewrite.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim().to_string(),
        }
    }

    /// The raw prefix, empty if the app is served at the origin root.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rewrite a logical path into its mounted form.
    ///
    /// Prefix and path are always joined with a separator and duplicate
    /// slashes are collapsed afterwards, so `/local/` + `/box/42` and
    /// `/local` + `box/42` both yield `/local/box/42`.
    pub fn rewrite(&self, logical_path: &str) -> String {
        normalize_slashes(&format!("{}/{}", self.prefix, logical_path))
    }

    /// Recover the logical path from a browser pathname.
    ///
    /// Pathnames outside the prefix are returned normalized but otherwise
    /// unchanged.
    pub fn strip(&self, pathname: &str) -> String {
        let path = normalize_slashes(pathname);
        let base = normalize_slashes(self.path_part());
        let base = base.trim_end_matches('/');

        if base.is_empty() {
            return ensure_leading_slash(&path);
        }
        if path == base {
            return "/".to_string();
        }
        match path.strip_prefix(base) {
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => ensure_leading_slash(&path),
        }
    }

    /// Path component of the prefix (drops `scheme://host` if present).
    fn path_part(&self) -> &str {
        match self.prefix.split_once("://") {
            Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
            None => &self.prefix,
        }
    }
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Install the process-wide mount configuration.
///
/// Succeeds once; later calls fail and leave the first config in place.
pub fn install(config: MountConfig) -> Result<&'static MountConfig, MountError> {
    let mut fresh = false;
    let current = INSTALLED.get_or_init(|| {
        fresh = true;
        config
    });

    if !fresh {
        return Err(MountError::AlreadyInstalled(current.prefix.clone()));
    }
    tracing::info!(prefix = %current.prefix, "mount prefix installed");
    Ok(current)
}

/// The installed mount configuration, if any.
#[inline]
pub fn installed() -> Option<&'static MountConfig> {
    INSTALLED.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_joins_without_duplicate_slashes() {
        let mount = MountConfig::new("/local");
        assert_eq!(mount.rewrite("/box/42"), "/local/box/42");
        assert_eq!(MountConfig::new("/local/").rewrite("/box/42"), "/local/box/42");
        assert_eq!(mount.rewrite("box/42"), "/local/box/42");
        assert_eq!(mount.rewrite("/"), "/local/");
    }

    #[test]
    fn test_rewrite_with_empty_prefix() {
        let mount = MountConfig::new("");
        assert_eq!(mount.rewrite("/unit/3"), "/unit/3");
        assert_eq!(mount.rewrite("/"), "/");
    }

    #[test]
    fn test_rewrite_keeps_scheme_separator() {
        let mount = MountConfig::new("http://homeassistant.local:8123/api/hassio_ingress/abc/");
        assert_eq!(
            mount.rewrite("/box/7"),
            "http://homeassistant.local:8123/api/hassio_ingress/abc/box/7"
        );
    }

    #[test]
    fn test_strip_recovers_logical_path() {
        let mount = MountConfig::new("/api/hassio_ingress/abc");
        assert_eq!(mount.strip("/api/hassio_ingress/abc/box/42"), "/box/42");
        assert_eq!(mount.strip("/api/hassio_ingress/abc"), "/");
        assert_eq!(mount.strip("/api/hassio_ingress/abc/"), "/");
        assert_eq!(mount.strip("/api/hassio_ingress/abc//unit/1"), "/unit/1");
    }

    #[test]
    fn test_strip_outside_prefix() {
        let mount = MountConfig::new("/local");
        assert_eq!(mount.strip("/box/42"), "/box/42");
        // A sibling path that merely shares the prefix text is not inside it
        assert_eq!(mount.strip("/localhost/box"), "/localhost/box");
    }

    #[test]
    fn test_strip_with_absolute_prefix() {
        let mount = MountConfig::new("https://example.org/inventory/");
        assert_eq!(mount.strip("/inventory/unit/2"), "/unit/2");
        assert_eq!(MountConfig::new("https://example.org").strip("/box/1"), "/box/1");
    }

    #[test]
    fn test_install_only_once() {
        let first = install(MountConfig::new("/first")).unwrap();
        assert_eq!(first.prefix(), "/first");

        let err = install(MountConfig::new("/second")).unwrap_err();
        assert_eq!(err, MountError::AlreadyInstalled("/first".to_string()));
        assert_eq!(installed().map(MountConfig::prefix), Some("/first"));
    }
}
