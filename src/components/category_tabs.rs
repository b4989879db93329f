// Category Tabs Component
// Switches between the file, link and text panels

use dioxus::prelude::*;

use crate::services::api::Category;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryTabsProps {
    pub selected: Category,
    pub on_change: EventHandler<Category>,
}

/// Tab bar over the three resource categories. Switching never resets the
/// panels behind it; they stay mounted.
#[component]
pub fn CategoryTabs(props: CategoryTabsProps) -> Element {
    let tabs = [
        (Category::File, "Files"),
        (Category::Link, "Links"),
        (Category::Text, "Texts"),
    ];

    rsx! {
        div {
            class: "flex items-center gap-2 border-b border-border pb-2",

            for (category, label) in tabs {
                button {
                    key: "{label}",
                    class: if props.selected == category {
                        "px-4 py-2 rounded-full text-sm font-medium bg-primary text-primary-foreground transition"
                    } else {
                        "px-4 py-2 rounded-full text-sm font-medium bg-muted hover:bg-muted/80 text-muted-foreground transition"
                    },
                    onclick: move |_| props.on_change.call(category),
                    "{label}"
                }
            }
        }
    }
}
