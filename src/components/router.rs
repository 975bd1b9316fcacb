//! Application router component.
//!
//! Path-based routing under an unknown mount prefix. The route signal in
//! [`AppContext`] is derived from `location.pathname` with the prefix
//! stripped.
//!
//! # Architecture
//!
//! - **The location is the source of truth**: the route is re-read on every
//!   `popstate`, both real (back/forward) and synthetic (after `pushState`)
//! - **Navigation never touches the route signal directly**: it goes through
//!   the verified navigator, which may fall back to a full page load

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use whereisit_core::Route;

use crate::app::AppContext;
use crate::components::views::{BoxView, HomeView, NotFound, SearchView, UnitView};

/// Main application router.
///
/// - `/` → Home (units + search)
/// - `/search` → Search page
/// - `/unit/:id` → Unit (boxes)
/// - `/box/:id` → Box (items), by id or by slug
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync_route();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback(
                crate::utils::dom::POPSTATE,
                closure.as_ref().unchecked_ref(),
            );
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move || {
        tracing::debug!(route = %ctx.route.get(), "route changed");
    });

    move || match ctx.route.get() {
        Route::Home => view! { <HomeView /> }.into_any(),
        Route::Search => view! { <SearchView /> }.into_any(),
        Route::Unit(id) => view! { <UnitView id=id /> }.into_any(),
        Route::Box(key) => view! { <BoxView box_key=key /> }.into_any(),
        Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}
