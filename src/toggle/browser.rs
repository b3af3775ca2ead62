//! Browser host backed by `web-sys`.
//!
//! Attaches to `window.localStorage`, `document.documentElement` and
//! `window.matchMedia`. Only compiled for `wasm32` with the `browser` feature.

use tracing::{debug, warn};
use web_sys::{Element, Storage, Window};

use super::config::ToggleConfig;
use super::host::Host;
use super::root::PresentationRoot;
use super::signal::SystemPreference;
use super::store::PreferenceStore;

/// The page the code is running in.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    type Store = LocalStorage;
    type Root = DocumentRoot;
    type Signal = MatchMedia;

    fn attach(self, config: &ToggleConfig) -> Option<(LocalStorage, DocumentRoot, MatchMedia)> {
        let window = web_sys::window()?;
        let element = window.document()?.document_element()?;
        let storage = window.local_storage().ok().flatten()?;
        debug!(query = %config.media_query, "attached to browser document");
        Some((
            LocalStorage { storage },
            DocumentRoot { element },
            MatchMedia {
                window,
                query: config.media_query.clone(),
            },
        ))
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            warn!(key, "localStorage write rejected");
        }
    }

    fn remove(&mut self, key: &str) {
        if self.storage.remove_item(key).is_err() {
            warn!(key, "localStorage remove rejected");
        }
    }
}

/// `document.documentElement`'s class list.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    element: Element,
}

impl PresentationRoot for DocumentRoot {
    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&mut self, class: &str) {
        if self.element.class_list().add_1(class).is_err() {
            warn!(class, "classList.add rejected");
        }
    }

    fn remove_class(&mut self, class: &str) {
        if self.element.class_list().remove_1(class).is_err() {
            warn!(class, "classList.remove rejected");
        }
    }

    fn toggle_class(&mut self, class: &str) -> bool {
        let list = self.element.class_list();
        list.toggle(class).unwrap_or_else(|_| {
            warn!(class, "classList.toggle rejected");
            list.contains(class)
        })
    }
}

/// `window.matchMedia(query).matches`, evaluated on every call.
#[derive(Debug, Clone)]
pub struct MatchMedia {
    window: Window,
    query: String,
}

impl SystemPreference for MatchMedia {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(&self.query)
            .ok()
            .flatten()
            .is_some_and(|list| list.matches())
    }
}
