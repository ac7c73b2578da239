//! Shared services for the widget.
//!
//! The root component provides one [`AppServices`] plus the word lists and
//! toast queue; children pick them up with the `use_*` hooks below.

use std::sync::Arc;

use chesed_core::{AppConfig, MemoryStore, RestStore, SharedStore, Storage, WelcomeGate, WordLists};
use dioxus::prelude::*;

use crate::components::Toasts;

/// Handles every component may need.
#[derive(Clone)]
pub struct AppServices {
    pub config: Arc<AppConfig>,
    /// Hosted store, or an in-memory one when none is configured
    pub store: SharedStore,
    /// First-visit gate; `None` when local storage could not be opened
    pub welcome: Option<WelcomeGate>,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let store: SharedStore = match &config.store_url {
            Some(url) => Arc::new(RestStore::new(url.clone(), config.store_key.clone())),
            None => Arc::new(MemoryStore::new()),
        };

        let welcome = match Storage::in_dir(&config.data_dir) {
            Ok(storage) => Some(WelcomeGate::new(storage)),
            Err(e) => {
                tracing::warn!("Local storage unavailable, welcome will not auto-show: {}", e);
                None
            }
        };

        Self {
            config: Arc::new(config.clone()),
            store,
            welcome,
        }
    }
}

/// Hook to access the shared services.
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

/// Hook to access the loaded word lists (empty until the load finishes).
pub fn use_word_lists() -> Signal<WordLists> {
    use_context::<Signal<WordLists>>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}
