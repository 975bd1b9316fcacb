//! Routed views.
//!
//! One component per [`Route`](whereisit_core::Route) variant. Views load
//! their own data and reach shared services through `AppContext`.

mod home;
mod search;
mod storage_box;
mod unit;

pub use home::HomeView;
pub use search::SearchView;
pub use storage_box::BoxView;
pub use unit::UnitView;

use leptos::prelude::*;
use leptos_icons::Icon;
use whereisit_core::{FetchError, Route, VerifyDelay};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/views/views.module.css");

/// Back link shown at the top of nested views.
#[component]
fn BackLink(to: Route, label: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <button
            class=css::back
            on:click=move |_| ctx.navigate(to.clone(), VerifyDelay::Plain)
        >
            <Icon icon=ic::CHEVRON_LEFT />
            <span>{label}</span>
        </button>
    }
}

#[component]
fn Loading() -> impl IntoView {
    view! { <div class=css::loading>"Loading..."</div> }
}

#[component]
fn LoadFailed(what: &'static str, error: FetchError) -> impl IntoView {
    view! {
        <div class=css::error>
            <p>{format!("Could not load {what}.")}</p>
            <p class=css::hint>{error.to_string()}</p>
        </div>
    }
}

/// Fallback for paths no route claims.
#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1>"404"</h1>
            <p>"Nothing lives at " <code>{path}</code></p>
            <BackLink to=Route::Home label="Home".to_string() />
        </div>
    }
}
