//! Verified client-side navigation.
//!
//! The in-page router can be overridden by whatever hosts the app (an
//! ingress shell rewriting history, for instance), so a route change is
//! never trusted blindly:
//!
//! 1. resolve the logical path against the mount prefix
//! 2. ask the in-page router for the transition
//! 3. wait a short verification window
//! 4. if the visible location does not end with the logical path, load the
//!    resolved URL as a full document
//!
//! A router error skips the wait and goes straight to step 4. The full
//! load is authoritative and is never verified or retried.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::NavigationError;
use crate::path::PathResolver;

/// Browser operations needed to navigate.
///
/// Implemented over `window.history`/`window.location` in the web crate and
/// by fakes in tests.
pub trait Browser {
    /// In-page route transition. `Ok` does not mean the transition took.
    fn push_route(&self, url: &str) -> Result<(), NavigationError>;

    /// Currently visible location pathname.
    fn current_path(&self) -> String;

    /// Full-document navigation.
    fn hard_navigate(&self, url: &str);

    /// Non-blocking wait on the event loop.
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;

    /// Milliseconds since the epoch.
    fn now_ms(&self) -> f64;
}

/// Length of the verification window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifyDelay {
    /// Plain navigation from a click.
    #[default]
    Plain,
    /// An async fetch ran right before the navigation; the router needs
    /// longer to settle.
    AfterFetch,
}

impl VerifyDelay {
    pub const PLAIN_MS: u64 = 50;
    pub const AFTER_FETCH_MS: u64 = 100;

    pub fn duration(self) -> Duration {
        match self {
            Self::Plain => Duration::from_millis(Self::PLAIN_MS),
            Self::AfterFetch => Duration::from_millis(Self::AFTER_FETCH_MS),
        }
    }
}

/// One navigation attempt; discarded once verification settles.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationRequest {
    pub target: String,
    pub resolved_url: String,
    pub issued_at_ms: f64,
}

impl NavigationRequest {
    /// Whether `pathname` shows the target, with or without a trailing
    /// slash.
    pub fn is_satisfied_by(&self, pathname: &str) -> bool {
        location_matches(pathname, &self.target)
    }
}

/// Suffix match of a visible pathname against a logical target.
pub fn location_matches(pathname: &str, target: &str) -> bool {
    pathname.ends_with(target) || pathname.ends_with(&format!("{}/", target))
}

/// How a navigation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The in-page router reached the target.
    InPage,
    /// The location did not match after the window; full load issued.
    ForcedAfterVerify,
    /// The router failed synchronously; full load issued without waiting.
    ForcedAfterError,
}

impl NavigationOutcome {
    pub fn was_forced(self) -> bool {
        !matches!(self, Self::InPage)
    }
}

#[derive(Clone, Debug)]
pub struct NavigationController<B> {
    resolver: PathResolver,
    browser: B,
}

impl<B: Browser> NavigationController<B> {
    pub fn new(resolver: PathResolver, browser: B) -> Self {
        Self { resolver, browser }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Navigate to `logical_path` and make sure the user ends up there.
    ///
    /// Callers normally spawn this and drop the outcome; it is returned for
    /// logging and tests. Overlapping calls are not ordered against each
    /// other.
    pub async fn navigate(&self, logical_path: &str, delay: VerifyDelay) -> NavigationOutcome {
        let request = NavigationRequest {
            target: logical_path.to_string(),
            resolved_url: self.resolver.resolve(logical_path),
            issued_at_ms: self.browser.now_ms(),
        };
        debug!(target_path = %request.target, url = %request.resolved_url, "navigating");

        if let Err(err) = self.browser.push_route(&request.resolved_url) {
            warn!(%err, url = %request.resolved_url, "in-page navigation failed, forcing full load");
            self.browser.hard_navigate(&request.resolved_url);
            return NavigationOutcome::ForcedAfterError;
        }

        self.browser.sleep(delay.duration()).await;

        let current = self.browser.current_path();
        if request.is_satisfied_by(&current) {
            debug!(
                target_path = %request.target,
                elapsed_ms = self.browser.now_ms() - request.issued_at_ms,
                "navigation verified"
            );
            return NavigationOutcome::InPage;
        }

        warn!(
            target_path = %request.target,
            current = %current,
            url = %request.resolved_url,
            "router did not reach target, forcing full load"
        );
        self.browser.hard_navigate(&request.resolved_url);
        NavigationOutcome::ForcedAfterVerify
    }
}
