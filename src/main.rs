mod app;
mod components;
mod config;
mod observability;
mod utils;

use app::App;
use config::RuntimeConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use whereisit_core::{MountConfig, mount};

fn main() {
    console_error_panic_hook::set_once();

    let config = RuntimeConfig::load();
    observability::init_tracing(config.log_level());

    if let Some(prefix) = config.mount_prefix
        && let Err(err) = mount::install(MountConfig::new(prefix))
    {
        tracing::warn!(%err, "keeping existing mount prefix");
    }

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
