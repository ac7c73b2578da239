//! Page header with the title and the info button.

use dioxus::prelude::*;

use super::WelcomeModal;

#[component]
pub fn Header() -> Element {
    let mut show_welcome = use_signal(|| false);

    rsx! {
        div { class: "header-bar",
            button {
                class: "btn-info",
                title: "Show welcome information",
                onclick: move |_| show_welcome.set(true),
                "ⓘ"
            }
        }

        h1 { class: "page-title", "The Chesed Machine" }
        p { class: "tagline",
            "Tap the button below to generate a unique chesed idea just for you! ✨"
        }

        WelcomeModal {
            show: show_welcome(),
            on_close: move |_| show_welcome.set(false),
        }
    }
}
