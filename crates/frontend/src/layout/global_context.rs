//! Opened pages of the dashboard
//!
//! Every sidebar entry opens a tab. A tab carries a refetch flag that list
//! pages watch: it is raised when the tab opens or when another page asks
//! for a reload, and the page lowers it once its request settles.

use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter holding the active tab key
const ACTIVE_PARAM: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub refetch: bool,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(Vec::new()),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the tab named in `?active=` and keep the URL in sync afterwards
    pub fn init_router_integration(&self) {
        if let Some(key) = active_from_url() {
            self.open_tab(&key, tab_label_for_key(&key));
        }

        let active = self.active;
        Effect::new(move |_| {
            if let Some(key) = active.get() {
                write_active_to_url(&key);
            }
        });
    }

    /// Open (or re-activate) a tab; a new tab starts with its refetch flag raised
    pub fn open_tab(&self, key: &str, title: &str) {
        let is_new = self
            .opened
            .with_untracked(|tabs| tabs.iter().all(|tab| tab.key != key));
        if is_new {
            log::debug!("open_tab: key='{}', title='{}'", key, title);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                    refetch: true,
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close a tab; closing the active one activates the last remaining tab
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let next = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|tab| tab.key.clone()));
            self.active.set(next);
        }
    }

    /// Reactive: whether the tab asked its page to reload
    pub fn needs_refetch(&self, key: &str) -> bool {
        self.opened
            .with(|tabs| tabs.iter().any(|tab| tab.key == key && tab.refetch))
    }

    pub fn request_refetch(&self, key: &str) {
        self.set_refetch(key, true);
    }

    pub fn disable_refetch(&self, key: &str) {
        self.set_refetch(key, false);
    }

    // only notifies subscribers when the flag actually flips
    fn set_refetch(&self, key: &str, value: bool) {
        let flips = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key && tab.refetch != value));
        if flips {
            self.opened.update(|tabs| {
                tabs.iter_mut()
                    .filter(|tab| tab.key == key)
                    .for_each(|tab| tab.refetch = value)
            });
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn active_from_url() -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(current_search().trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).cloned()
}

fn write_active_to_url(key: &str) {
    let query = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM, key)])).unwrap_or_default();
    let url = format!("?{}", query);
    if current_search() == url {
        return;
    }
    let history = window().and_then(|w| w.history().ok());
    if let Some(history) = history {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("failed to update url: {:?}", e);
        }
    }
}
