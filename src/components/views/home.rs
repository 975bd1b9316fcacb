use leptos::prelude::*;
use leptos_icons::Icon;
use whereisit_core::{Route, Unit, VerifyDelay, ViewToken};

use super::{LoadFailed, Loading, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::search::SearchPanel;
use crate::utils::fetch_json;

const ORIGIN: ViewToken = ViewToken("home");

/// Landing view: search on top, all units below.
#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let units = LocalResource::new(move || {
        let url = ctx.endpoints.with_value(|e| e.units());
        async move { fetch_json::<Vec<Unit>>(&url).await }
    });

    view! {
        <div class=css::page>
            <SearchPanel origin=ORIGIN />

            <h2 class=css::sectionTitle>"Storage units"</h2>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || units.get().map(|result| match result {
                    Ok(units) if units.is_empty() => view! {
                        <p class=css::hint>"No storage units yet."</p>
                    }.into_any(),
                    Ok(units) => view! {
                        <div class=css::grid>
                            {units.into_iter().map(|unit| view! { <UnitCard unit=unit /> }).collect_view()}
                        </div>
                    }.into_any(),
                    Err(error) => view! { <LoadFailed what="storage units" error=error /> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn UnitCard(unit: Unit) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = unit.id;
    let box_count = unit.boxes.len();

    view! {
        <button class=css::card on:click=move |_| ctx.navigate(Route::Unit(id), VerifyDelay::Plain)>
            <span class=css::cardIcon><Icon icon=ic::UNIT /></span>
            <span class=css::cardTitle>{unit.name}</span>
            {unit.description.map(|d| view! { <span class=css::cardText>{d}</span> })}
            <span class=css::cardMeta>
                {match box_count {
                    1 => "1 box".to_string(),
                    n => format!("{n} boxes"),
                }}
            </span>
        </button>
    }
}
