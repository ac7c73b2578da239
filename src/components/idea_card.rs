//! Idea Card Component
//!
//! One labelled slot of the idea with its own regenerate button.

use dioxus::prelude::*;

/// Card showing one part of the idea.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IdeaCard {
///         title: "Do what:",
///         content: "Bake challah",
///         flipping: false,
///         on_regenerate: move |_| regenerate(Slot::Action),
///     }
/// }
/// ```
#[component]
pub fn IdeaCard(
    /// Slot label
    title: String,
    /// Current value
    content: String,
    /// Whether the flip animation is running
    #[props(default = false)]
    flipping: bool,
    /// Raised by the regenerate button
    on_regenerate: EventHandler<()>,
) -> Element {
    let flip_class = if flipping { "idea-card--flipping" } else { "" };

    rsx! {
        div { class: "idea-card {flip_class}",
            button {
                class: "idea-card__regenerate",
                title: "New suggestion",
                onclick: move |e| {
                    e.stop_propagation();
                    on_regenerate.call(());
                },
                "↻"
            }

            h3 { class: "idea-card__title", "{title}" }
            p { class: "idea-card__content", "{content}" }
        }
    }
}
