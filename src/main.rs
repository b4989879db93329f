#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod routes;
mod services;
mod stores;
mod utils;

use services::api::Category;
use stores::used_ids::UsedRegistry;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting sharebin web client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The used-id registry is owned here and handed down through context,
    // one cache per category
    let registry = use_context_provider(UsedRegistry::new);

    // Prime every category's cache once at startup
    use_effect(move || {
        for category in Category::ALL {
            registry.refresh(category);
        }
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
