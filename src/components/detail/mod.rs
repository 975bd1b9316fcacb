//! Shared item detail dialog.
//!
//! Mounted once at the application root. While mounted it is the
//! [`DetailSurface`] registered with the app's [`DetailMediator`]; views
//! never reference it directly.
//!
//! [`DetailMediator`]: whereisit_core::DetailMediator

use std::rc::Rc;

use leptos::prelude::*;
use leptos_icons::Icon;
use whereisit_core::{DetailSurface, Item, SessionId};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/detail/detail.module.css");

/// Surface state: the session being shown, if any.
#[derive(Clone, Copy)]
struct SignalSurface {
    shown: RwSignal<Option<(SessionId, Item)>>,
}

impl DetailSurface for SignalSurface {
    fn show(&self, session: SessionId, item: &Item) {
        self.shown.set(Some((session, item.clone())));
    }

    fn hide(&self) {
        self.shown.set(None);
    }
}

#[component]
pub fn ItemDetailDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let shown = RwSignal::new(None::<(SessionId, Item)>);
    ctx.detail
        .with_value(|mediator| mediator.attach(Rc::new(SignalSurface { shown })));
    on_cleanup(move || {
        ctx.detail.try_with_value(|mediator| mediator.detach());
    });

    let close = move |_| {
        if let Some((session, _)) = shown.get_untracked() {
            ctx.detail.with_value(|mediator| mediator.close(session));
        }
    };
    let edit = move |_| {
        if let Some((session, _)) = shown.get_untracked() {
            ctx.detail.with_value(|mediator| mediator.request_edit(session));
        }
    };

    view! {
        <Show when=move || shown.with(Option::is_some)>
            <div class=css::backdrop on:click=close>
                <div
                    class=css::dialog
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    {move || shown.get().map(|(_, item)| view! { <ItemDetail item=item /> })}
                    <div class=css::actions>
                        <button class=css::secondary on:click=close>
                            <Icon icon=ic::CLOSE />
                            " Close"
                        </button>
                        <button class=css::primary on:click=edit>
                            <Icon icon=ic::EDIT />
                            " Edit"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ItemDetail(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let photo = item
        .photo_path
        .as_deref()
        .map(|p| ctx.endpoints.with_value(|e| e.photo(p)));
    let box_name = item.box_name().map(str::to_string);

    view! {
        <h2 class=css::title>{item.name.clone()}</h2>
        {match photo {
            Some(src) => view! { <img class=css::photo src=src alt=item.name.clone() /> }.into_any(),
            None => view! { <div class=css::photoPlaceholder><Icon icon=ic::PHOTO /></div> }.into_any(),
        }}
        <dl class=css::facts>
            <dt>"Quantity"</dt>
            <dd>{item.quantity}</dd>
            {item.category.map(|c| view! { <dt>"Category"</dt><dd>{c}</dd> })}
            {box_name.map(|b| view! { <dt>"Box"</dt><dd>{b}</dd> })}
        </dl>
        {item.description.map(|d| view! { <p class=css::description>{d}</p> })}
    }
}
