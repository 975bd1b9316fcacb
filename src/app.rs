//! Root application module.
//!
//! Contains the main App component, the AppContext handed to every view,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use whereisit_core::{
    DetailMediator, Endpoints, Item, NavigationController, PathResolver, Route, VerifyDelay,
    ViewToken,
};

use crate::components::AppRouter;
use crate::components::detail::ItemDetailDialog;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::utils::{DomBrowser, dom};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide services and state.
///
/// Provided at the root of the component tree and read by views with
/// `use_context::<AppContext>()`. Everything in here is built once at
/// start-up; views never look each other up.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle. The
/// mediator holds `Rc`s, so it lives in local storage.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route, kept in sync with `location.pathname`.
    pub route: RwSignal<Route>,

    /// Backend URLs, resolved against the mount prefix.
    pub endpoints: StoredValue<Endpoints>,

    /// Verified in-page navigation.
    pub navigator: StoredValue<NavigationController<DomBrowser>>,

    /// Broker for the shared item detail dialog.
    pub detail: StoredValue<DetailMediator, LocalStorage>,
}

impl AppContext {
    pub fn new(resolver: PathResolver) -> Self {
        let route = Route::from_pathname(&dom::pathname(), &resolver);
        Self {
            route: RwSignal::new(route),
            endpoints: StoredValue::new(Endpoints::new(resolver.clone())),
            navigator: StoredValue::new(NavigationController::new(resolver, DomBrowser)),
            detail: StoredValue::new_local(DetailMediator::new()),
        }
    }

    /// Re-read the route from the browser location.
    pub fn sync_route(&self) {
        let route = self
            .navigator
            .with_value(|nav| Route::from_pathname(&dom::pathname(), nav.resolver()));
        self.route.set(route);
    }

    /// Navigate to `route`; falls back to a full page load by itself.
    pub fn navigate(&self, route: Route, delay: VerifyDelay) {
        let navigator = self.navigator.get_value();
        spawn_local(async move {
            navigator.navigate(&route.logical_path(), delay).await;
        });
    }

    /// Show `item` in the shared detail dialog.
    ///
    /// Does nothing (beyond a log line) if the dialog is not mounted.
    pub fn present_item<F>(&self, item: Item, origin: ViewToken, on_edit: F)
    where
        F: FnOnce(Item) + 'static,
    {
        let presented = self
            .detail
            .try_with_value(|mediator| mediator.present(item, origin, on_edit));
        if let Some(Err(err)) = presented {
            tracing::warn!(%err, %origin, "item detail not shown");
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the header, the routed view and the shared detail dialog
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(PathResolver::from_installed());
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorPage>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul class=css::errorList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        class=css::reloadButton
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Header />
            <main class=css::content>
                <AppRouter />
            </main>
            <ItemDetailDialog />
        </ErrorBoundary>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <header class=css::header>
            <button
                class=css::brand
                on:click=move |_| ctx.navigate(Route::Home, VerifyDelay::Plain)
            >
                <Icon icon=ic::HOME />
                <span>{APP_NAME}</span>
            </button>
            <button
                class=css::headerAction
                title="Search"
                on:click=move |_| ctx.navigate(Route::Search, VerifyDelay::Plain)
            >
                <Icon icon=ic::SEARCH />
            </button>
        </header>
    }
}
