//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Event the router listens to for location changes.
pub const POPSTATE: &str = "popstate";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current `location.pathname`, `/` if unavailable.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `content` attribute of `<meta name="...">`, if present and non-empty.
pub fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
        .filter(|c| !c.trim().is_empty())
}

/// Fire a synthetic `popstate` so listeners pick up a `pushState`.
pub fn notify_location_change(window: &Window) -> Result<(), JsValue> {
    let event = web_sys::Event::new(POPSTATE)?;
    window.dispatch_event(&event).map(|_| ())
}

/// Best-effort string form of a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn add_meta(name: &str, content: &str) {
        let doc = document().unwrap();
        let meta = doc.create_element("meta").unwrap();
        meta.set_attribute("name", name).unwrap();
        meta.set_attribute("content", content).unwrap();
        doc.head().unwrap().append_child(&meta).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_meta_content_present() {
        add_meta("whereisit-test-prefix", "/ingress/abc");
        assert_eq!(
            meta_content("whereisit-test-prefix").as_deref(),
            Some("/ingress/abc")
        );
    }

    #[wasm_bindgen_test]
    fn test_meta_content_blank_is_none() {
        add_meta("whereisit-test-blank", "  ");
        assert_eq!(meta_content("whereisit-test-blank"), None);
        assert_eq!(meta_content("whereisit-test-missing"), None);
    }

    #[wasm_bindgen_test]
    fn test_js_error_message() {
        assert_eq!(js_error_message(&JsValue::from_str("boom")), "boom");
        let err = js_sys::Error::new("bad state");
        assert_eq!(js_error_message(&err.into()), "bad state");
    }

    #[wasm_bindgen_test]
    fn test_notify_location_change_reaches_listeners() {
        use std::cell::Cell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let listener = Closure::wrap(Box::new(move || counter.set(counter.get() + 1)) as Box<dyn Fn()>);

        let win = window().unwrap();
        win.add_event_listener_with_callback(POPSTATE, listener.as_ref().unchecked_ref())
            .unwrap();
        notify_location_change(&win).unwrap();
        win.remove_event_listener_with_callback(POPSTATE, listener.as_ref().unchecked_ref())
            .unwrap();

        assert_eq!(hits.get(), 1);
    }
}
