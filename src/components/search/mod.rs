//! Free-text + category search panel.
//!
//! Used by the home view and the search page. Each mounted panel owns its
//! own [`SearchCoordinator`]; the signal below only mirrors its results so
//! the view re-renders.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;
use whereisit_core::{
    Item, Route, SearchCoordinator, SearchOutcome, SearchResults, StorageBox, VerifyDelay,
    ViewToken,
};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{HttpSearchBackend, fetch_json};

stylance::import_crate_style!(css, "src/components/search/search.module.css");

type Coordinator = StoredValue<SearchCoordinator<HttpSearchBackend>, LocalStorage>;

/// Run a coordinator future and publish its results if they changed.
fn apply<F>(coordinator: Coordinator, results: RwSignal<SearchResults>, search: F)
where
    F: Future<Output = SearchOutcome> + 'static,
{
    spawn_local(async move {
        if search.await.changed_results()
            && let Some(latest) = coordinator.try_with_value(|c| c.results())
        {
            results.try_set(latest);
        }
    });
}

fn chip_class(selected: bool) -> String {
    if selected {
        format!("{} {}", css::chip, css::chipSelected)
    } else {
        css::chip.to_string()
    }
}

#[component]
pub fn SearchPanel(
    /// Reported to the detail dialog as the presenting view.
    origin: ViewToken,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let coordinator: Coordinator = StoredValue::new_local(SearchCoordinator::new(
        HttpSearchBackend,
        ctx.endpoints.get_value(),
    ));
    let results = RwSignal::new(SearchResults::default());
    let active = RwSignal::new(false);
    let selected = RwSignal::new(None::<String>);

    let categories = LocalResource::new(move || {
        let url = ctx.endpoints.with_value(|e| e.categories());
        async move {
            fetch_json::<Vec<String>>(&url).await.unwrap_or_else(|err| {
                tracing::warn!(%err, "categories unavailable");
                Vec::new()
            })
        }
    });

    let on_input = move |ev| {
        let text = event_target_value(&ev);
        let search = coordinator.with_value(|c| c.update_query(text));
        active.set(coordinator.with_value(|c| c.is_active()));
        apply(coordinator, results, search);
    };

    let choose = move |category: Option<String>| {
        selected.set(category.clone());
        let search = coordinator.with_value(|c| c.select_category(category));
        active.set(coordinator.with_value(|c| c.is_active()));
        apply(coordinator, results, search);
    };

    let open_box = move |storage_box: &StorageBox| {
        ctx.navigate(Route::Box(storage_box.id.into()), VerifyDelay::AfterFetch);
    };
    let open_item = move |item: Item| {
        ctx.present_item(item, origin, move |edited| {
            ctx.navigate(Route::Box(edited.box_id.into()), VerifyDelay::AfterFetch);
        });
    };

    view! {
        <section class=css::panel>
            <label class=css::searchBox>
                <Icon icon=ic::SEARCH />
                <input
                    type="search"
                    placeholder="Search items and boxes"
                    autofocus=autofocus
                    on:input=on_input
                />
            </label>

            <Suspense fallback=|| ()>
                {move || categories.get().map(|names| view! {
                    <div class=css::chips>
                        <button
                            class=move || chip_class(selected.with(Option::is_none))
                            on:click=move |_| choose(None)
                        >
                            "All"
                        </button>
                        {names.into_iter().map(|name| {
                            let label = name.clone();
                            let this = name.clone();
                            view! {
                                <button
                                    class=move || chip_class(selected.with(|s| s.as_deref() == Some(this.as_str())))
                                    on:click=move |_| choose(Some(name.clone()))
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })}
            </Suspense>

            <Show when=move || active.get()>
                {move || results.with(|found| {
                    if found.is_empty() {
                        return view! {
                            <div class=css::empty>
                                <Icon icon=ic::NO_RESULTS />
                                <p>"Nothing matches."</p>
                            </div>
                        }.into_any();
                    }

                    let boxes = found.boxes.clone();
                    let items = found.items.clone();
                    view! {
                        <div class=css::results>
                            {(!boxes.is_empty()).then(|| view! {
                                <h3 class=css::groupTitle>"Boxes"</h3>
                                <ul class=css::list>
                                    {boxes.into_iter().map(|b| {
                                        let name = b.name.clone();
                                        view! {
                                            <li>
                                                <button class=css::row on:click=move |_| open_box(&b)>
                                                    <Icon icon=ic::STORAGE_BOX />
                                                    <span>{name}</span>
                                                </button>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            })}
                            {(!items.is_empty()).then(|| view! {
                                <h3 class=css::groupTitle>"Items"</h3>
                                <ul class=css::list>
                                    {items.into_iter().map(|item| {
                                        let name = item.name.clone();
                                        let location = item.box_name().map(str::to_string);
                                        view! {
                                            <li>
                                                <button
                                                    class=css::row
                                                    on:click=move |_| open_item(item.clone())
                                                >
                                                    <Icon icon=ic::ITEM />
                                                    <span>{name}</span>
                                                    {location.map(|l| view! {
                                                        <span class=css::location>{l}</span>
                                                    })}
                                                </button>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            })}
                        </div>
                    }.into_any()
                })}
            </Show>
        </section>
    }
}
