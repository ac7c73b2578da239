//! Idea Generator
//!
//! The three idea cards, the generate button, the commitment button and the
//! shared counter.

use dioxus::prelude::*;

use chesed_core::counter::{self, IncrementOutcome};
use chesed_core::{IdeaState, SharedStore, Slot, WordLists, FLIP_DURATION, FLIP_MIDPOINT};

use super::{IdeaCard, IdeasCounter, ShareModal};
use crate::context::{use_services, use_word_lists};

/// Main generator view.
#[component]
pub fn IdeaGenerator() -> Element {
    let services = use_services();
    let word_lists = use_word_lists();
    let idea: Signal<IdeaState> = use_signal(IdeaState::default);
    let counter: Signal<i64> = use_signal(|| 0);
    let mut share_open = use_signal(|| false);

    // Initial counter read
    let store = services.store.clone();
    use_hook(move || {
        spawn(refresh_counter(store, counter));
    });

    let store = services.store.clone();
    let regenerate = use_callback(move |slots: Vec<Slot>| {
        spawn(run_flip(store.clone(), slots, idea, word_lists, counter));
    });

    let state = idea.read().clone();

    rsx! {
        div { class: "idea-generator",
            button {
                class: "btn-generate",
                onclick: move |_| regenerate.call(Slot::ALL.to_vec()),
                "Generate new idea! 🎉"
            }

            div { class: "idea-grid",
                for slot in Slot::ALL {
                    IdeaCard {
                        key: "{slot}",
                        title: slot.title().to_string(),
                        content: state.idea.get(slot).to_string(),
                        flipping: state.is_flipping(slot),
                        on_regenerate: move |_| regenerate.call(vec![slot]),
                    }
                }
            }

            button {
                class: "btn-commit",
                onclick: move |_| share_open.set(true),
                span { "🎯 Yes! I'll Do This One! 🎯" }
                span { class: "btn-commit__sub", "bli neder" }
            }

            IdeasCounter { count: counter() }

            if share_open() {
                ShareModal {
                    idea: state.idea.clone(),
                    on_close: move |_| share_open.set(false),
                }
            }
        }
    }
}

/// Flip `slots` to fresh values, swapping the text at the animation midpoint.
///
/// The counter increment runs alongside and never holds up the flip.
async fn run_flip(
    store: SharedStore,
    slots: Vec<Slot>,
    mut idea: Signal<IdeaState>,
    word_lists: Signal<WordLists>,
    counter: Signal<i64>,
) {
    let pending = {
        let lists = word_lists.read();
        idea.write().begin_flip(&slots, &lists, &mut rand::rng())
    };

    let observed = *counter.peek();
    spawn(async move {
        match counter::increment_from(store.as_ref(), observed).await {
            Ok(IncrementOutcome::Applied(count)) => tracing::debug!(count, "Counter incremented"),
            Ok(IncrementOutcome::Conflict) => tracing::debug!(observed, "Counter increment lost a race"),
            Err(e) => tracing::warn!("Error incrementing counter: {}", e),
        }
        refresh_counter(store, counter).await;
    });

    tokio::time::sleep(FLIP_MIDPOINT).await;
    idea.write().apply(&pending);

    tokio::time::sleep(FLIP_DURATION - FLIP_MIDPOINT).await;
    idea.write().finish(&pending);
}

/// Re-read the shared counter. On failure the last value stays on screen.
async fn refresh_counter(store: SharedStore, mut counter: Signal<i64>) {
    match store.fetch_counter().await {
        Ok(row) => counter.set(row.count),
        Err(e) => tracing::warn!("Error fetching counter: {}", e),
    }
}
