use leptos::prelude::*;
use leptos_icons::Icon;
use whereisit_core::{BoxKey, Item, Route, StorageBox, ViewToken};

use super::{BackLink, LoadFailed, Loading, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::fetch_json;

const ORIGIN: ViewToken = ViewToken("box");

/// One box, its QR label and its items.
///
/// The box is addressed by id or by the slug from its QR label; once loaded,
/// the real id is used. Items open in the shared detail dialog. An edit
/// request coming back from the dialog marks that item in the list.
#[component]
pub fn BoxView(box_key: BoxKey) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let editing = RwSignal::new(None::<u64>);

    let storage_box = LocalResource::new(move || {
        let url = ctx.endpoints.with_value(|e| e.box_by_key(&box_key));
        async move { fetch_json::<StorageBox>(&url).await }
    });

    view! {
        <div class=css::page>
            <Suspense fallback=|| view! { <Loading /> }>
                {move || storage_box.get().map(|result| match result {
                    Ok(found) => {
                        let qrcode = ctx.endpoints.with_value(|e| e.box_qrcode(found.id));
                        let items = found.located_items();
                        view! {
                            <BackLink to=Route::Unit(found.unit_id) label="Unit".to_string() />
                            <div class=css::boxHeader>
                                <div>
                                    <h1 class=css::title>{found.name}</h1>
                                    {found.description.map(|d| view! { <p class=css::hint>{d}</p> })}
                                </div>
                                <img class=css::qrcode src=qrcode alt="QR code for this box" />
                            </div>
                            {if items.is_empty() {
                                view! { <p class=css::hint>"This box is empty."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class=css::list>
                                        {items.into_iter().map(|item| view! {
                                            <ItemRow item=item editing=editing />
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                        }.into_any()
                    }
                    Err(error) => view! {
                        <BackLink to=Route::Home label="Home".to_string() />
                        <LoadFailed what="this box" error=error />
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ItemRow(item: Item, editing: RwSignal<Option<u64>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = item.id;
    let name = item.name.clone();
    let quantity = item.quantity;

    let row_class = move || {
        if editing.get() == Some(id) {
            format!("{} {}", css::row, css::rowEditing)
        } else {
            css::row.to_string()
        }
    };

    view! {
        <li>
            <button
                class=row_class
                on:click=move |_| {
                    ctx.present_item(item.clone(), ORIGIN, move |edited| {
                        tracing::info!(item = edited.id, "edit requested");
                        editing.try_set(Some(edited.id));
                    });
                }
            >
                <Icon icon=ic::ITEM />
                <span class=css::rowTitle>{name}</span>
                <span class=css::rowMeta>{format!("x{quantity}")}</span>
                <Show when=move || editing.get() == Some(id)>
                    <span class=css::badge><Icon icon=ic::EDIT /> " editing"</span>
                </Show>
            </button>
        </li>
    }
}
