//! Welcome Modal Component
//!
//! Explains how the machine works. Opens by itself on a device's first
//! visit and on demand from the header's info button.

use dioxus::prelude::*;

use crate::context::use_services;

/// Welcome/info overlay.
#[component]
pub fn WelcomeModal(
    /// Whether to show the modal
    show: bool,
    /// Callback when modal is closed
    on_close: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content welcome-modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "welcome-modal__title", "✨ Welcome to the Chesed Machine! ✨" }

                p { class: "welcome-modal__quote",
                    "Chesed is one of the three pillars the world stands on (Avos 1:2)."
                }

                p {
                    "Most of us want to help the people around us, but planning something big is daunting "
                    "and even a small idea can be hard to come up with on the spot."
                }

                div { class: "welcome-modal__callout",
                    p { class: "welcome-modal__callout-title", "Enter the Chesed Machine!" }
                    p {
                        "It puts together a quick idea for a chesed you can do for the people in your life, "
                        "near or far."
                    }
                }

                p { class: "welcome-modal__heading", "How it works:" }
                ol { class: "welcome-modal__steps",
                    li { "Press \"Generate new idea\" to get a fresh suggestion." }
                    li {
                        "The what, who and when each appear in their own card. Keep the idea, "
                        "generate a whole new one, or re-roll a single card with its ↻ button."
                    }
                    li {
                        "When you've settled on one, press \"I'll Do This One\" to log your chesed "
                        "and share it."
                    }
                    li { class: "welcome-modal__warning",
                        "Your chesed is only logged once you press that button!"
                    }
                }

                p {
                    "Sometimes the machine comes up with something wild. We'd love to hear about those, "
                    "along with any comments or suggestions."
                }
                p { class: "welcome-modal__email", "✉ chessedmachine@gmail.com" }

                button {
                    class: "btn-generate welcome-modal__start",
                    onclick: move |_| on_close.call(()),
                    "Let's Get Started!"
                }
            }
        }
    }
}

/// Welcome overlay that opens by itself the first time this device runs the widget.
#[component]
pub fn FirstVisitWelcome() -> Element {
    let services = use_services();
    let mut open = use_signal(move || match &services.welcome {
        Some(gate) => gate.check_first_visit().unwrap_or_else(|e| {
            tracing::warn!("Could not read first-visit flag: {}", e);
            false
        }),
        None => false,
    });

    rsx! {
        WelcomeModal {
            show: open(),
            on_close: move |_| open.set(false),
        }
    }
}
