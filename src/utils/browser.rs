//! [`Browser`] over `window.history` and `window.location`.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use whereisit_core::{Browser, NavigationError};

use crate::utils::dom;

/// The in-page router: `history.pushState` followed by a synthetic
/// `popstate` that the app router listens to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomBrowser;

impl Browser for DomBrowser {
    fn push_route(&self, url: &str) -> Result<(), NavigationError> {
        let window = dom::window().ok_or(NavigationError::NoWindow)?;
        let history = window
            .history()
            .map_err(|e| NavigationError::Rejected(dom::js_error_message(&e)))?;

        history
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| NavigationError::Rejected(dom::js_error_message(&e)))?;

        dom::notify_location_change(&window)
            .map_err(|e| NavigationError::Rejected(dom::js_error_message(&e)))
    }

    fn current_path(&self) -> String {
        dom::pathname()
    }

    fn hard_navigate(&self, url: &str) {
        if let Some(window) = dom::window()
            && let Err(e) = window.location().set_href(url)
        {
            tracing::error!(url, error = %dom::js_error_message(&e), "full page load failed");
        }
    }

    fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
