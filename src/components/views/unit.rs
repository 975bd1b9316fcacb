use leptos::prelude::*;
use leptos_icons::Icon;
use whereisit_core::{Route, StorageBox, Unit, VerifyDelay};

use super::{BackLink, LoadFailed, Loading, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::fetch_json;

/// One storage unit and its boxes.
#[component]
pub fn UnitView(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let unit = LocalResource::new(move || {
        let url = ctx.endpoints.with_value(|e| e.unit(id));
        async move { fetch_json::<Unit>(&url).await }
    });

    view! {
        <div class=css::page>
            <BackLink to=Route::Home label="Home".to_string() />
            <Suspense fallback=|| view! { <Loading /> }>
                {move || unit.get().map(|result| match result {
                    Ok(unit) => view! {
                        <h1 class=css::title>{unit.name}</h1>
                        {unit.description.map(|d| view! { <p class=css::hint>{d}</p> })}
                        {if unit.boxes.is_empty() {
                            view! { <p class=css::hint>"This unit has no boxes."</p> }.into_any()
                        } else {
                            view! {
                                <ul class=css::list>
                                    {unit.boxes.into_iter().map(|b| view! { <BoxRow storage_box=b /> }).collect_view()}
                                </ul>
                            }.into_any()
                        }}
                    }.into_any(),
                    Err(error) => view! { <LoadFailed what="this unit" error=error /> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn BoxRow(storage_box: StorageBox) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = storage_box.id;

    view! {
        <li>
            <button class=css::row on:click=move |_| ctx.navigate(Route::Box(id.into()), VerifyDelay::Plain)>
                <Icon icon=ic::STORAGE_BOX />
                <span class=css::rowTitle>{storage_box.name}</span>
                {storage_box.description.map(|d| view! { <span class=css::rowText>{d}</span> })}
            </button>
        </li>
    }
}
