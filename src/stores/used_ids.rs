//! Client-side mirror of server-known identifiers, one list per category.
//!
//! A best-effort conflict hint, not a correctness guarantee: the server
//! stays authoritative at create time. Lists are replaced wholesale on each
//! successful fetch and kept stale on failure.

use dioxus::prelude::*;

use crate::services::api::{self, Category, UsedEntry};

/// Category-keyed registry of used identifiers, owned by the app root and
/// handed down through context.
#[derive(Clone, Copy)]
pub struct UsedRegistry {
    files: Signal<Vec<UsedEntry>>,
    links: Signal<Vec<UsedEntry>>,
    texts: Signal<Vec<UsedEntry>>,
}

impl UsedRegistry {
    pub fn new() -> Self {
        Self {
            files: Signal::new(Vec::new()),
            links: Signal::new(Vec::new()),
            texts: Signal::new(Vec::new()),
        }
    }

    fn slot(&self, category: Category) -> Signal<Vec<UsedEntry>> {
        match category {
            Category::File => self.files,
            Category::Link => self.links,
            Category::Text => self.texts,
        }
    }

    /// Decoded identifiers currently known for one category.
    pub fn ids(&self, category: Category) -> Vec<i64> {
        self.slot(category).read().iter().map(|e| e.id).collect()
    }

    /// Refetch one category's list in the background, replacing it wholesale
    /// on success. Failures keep the stale list and are only logged.
    pub fn refresh(&self, category: Category) {
        let mut slot = self.slot(category);
        spawn(async move {
            match api::fetch_used(&api::base_url(), category).await {
                Ok(entries) => {
                    log::info!("Loaded {} used {} ids", entries.len(), category.label());
                    slot.set(entries);
                }
                Err(err) => {
                    log::warn!("Keeping stale {} id list: {}", category.label(), err);
                }
            }
        });
    }
}

impl Default for UsedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
