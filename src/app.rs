use dioxus::prelude::*;

use chesed_core::{load_word_lists, WordLists};

use crate::components::{notify, FirstVisitWelcome, Header, IdeaGenerator, ToastKind, ToastStack, Toasts};
use crate::context::AppServices;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, shared services and the word lists, then loads
/// the lists once on mount.
#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| AppServices::new(&crate::app_config()));
    let mut word_lists: Signal<WordLists> = use_signal(WordLists::default);
    let toasts: Signal<Toasts> = use_signal(Toasts::default);

    use_context_provider(|| word_lists);
    use_context_provider(|| toasts);

    // Load word lists on mount
    use_hook(move || {
        spawn(async move {
            match load_word_lists(&services.config.word_source, services.store.as_ref()).await {
                Ok(lists) => {
                    if lists.is_empty() {
                        tracing::warn!("Word lists loaded but empty");
                    }
                    word_lists.set(lists);
                }
                Err(e) => {
                    tracing::error!("Error fetching word lists: {}", e);
                    notify(toasts, ToastKind::Error, "Failed to load ideas", None);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            FirstVisitWelcome {}
            Header {}
            IdeaGenerator {}
        }
        ToastStack {}
    }
}
