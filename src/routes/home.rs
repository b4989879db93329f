use dioxus::prelude::*;

use crate::components::{CategoryTabs, ShareForm};
use crate::services::api::Category;

/// The single page: one panel per category behind a tab bar.
///
/// All three panels stay mounted so switching tabs never resets the
/// inactive ones; only visibility changes.
#[component]
pub fn Home() -> Element {
    let mut active = use_signal(|| Category::File);

    rsx! {
        div {
            class: "min-h-screen bg-background",
            div {
                class: "max-w-2xl mx-auto p-4 space-y-4",

                header {
                    h1 {
                        class: "text-2xl font-bold",
                        "sharebin"
                    }
                    p {
                        class: "text-sm text-muted-foreground",
                        "Share a file, a link or a text under a short id"
                    }
                }

                CategoryTabs {
                    selected: *active.read(),
                    on_change: move |category| active.set(category),
                }

                for category in Category::ALL {
                    div {
                        key: "{category.segment()}",
                        class: if *active.read() == category { "block" } else { "hidden" },
                        ShareForm { category }
                    }
                }
            }
        }
    }
}
