use leptos::prelude::*;
use whereisit_core::{Route, ViewToken};

use super::{BackLink, css};
use crate::components::search::SearchPanel;

const ORIGIN: ViewToken = ViewToken("search");

/// Dedicated search page.
#[component]
pub fn SearchView() -> impl IntoView {
    view! {
        <div class=css::page>
            <BackLink to=Route::Home label="Home".to_string() />
            <h1 class=css::title>"Search"</h1>
            <SearchPanel origin=ORIGIN autofocus=true />
        </div>
    }
}
