//! Shared "ideas generated" tally.

use dioxus::prelude::*;

#[component]
pub fn IdeasCounter(count: i64) -> Element {
    rsx! {
        div { class: "ideas-counter",
            span { class: "ideas-counter__value", "{count}" }
            span { class: "ideas-counter__label", " chesed ideas generated so far" }
        }
    }
}
