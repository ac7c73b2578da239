//! Toast notifications
//!
//! Transient messages stacked in the corner. Each toast dismisses itself
//! after [`TOAST_LIFETIME`] or when clicked.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::use_toasts;

/// How long a toast stays up on its own.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Queue of visible toasts.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Toasts {
    next_id: u64,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: Option<&str>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Show a toast and schedule its removal.
///
/// The timer runs in the root scope, so it survives the caller unmounting
/// (a dialog that toasts and then closes itself).
pub fn notify(mut toasts: Signal<Toasts>, kind: ToastKind, title: &str, description: Option<&str>) {
    let id = toasts.write().push(kind, title, description);
    spawn_forever(async move {
        tokio::time::sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });
}

/// Renders the toast queue.
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-stack",
            {items.into_iter().map(move |toast| {
                let id = toast.id;
                let class = match toast.kind {
                    ToastKind::Success => "toast",
                    ToastKind::Error => "toast toast--error",
                };
                rsx! {
                    div {
                        key: "{id}",
                        class: "{class}",
                        onclick: move |_| toasts.write().dismiss(id),

                        p { class: "toast__title", "{toast.title}" }
                        if let Some(desc) = toast.description {
                            p { class: "toast__description", "{desc}" }
                        }
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastKind::Success, "Copied to clipboard", None);
        let b = toasts.push(ToastKind::Error, "Failed to load ideas", Some("Please try again"));
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].title, "Failed to load ideas");

        // Dismissing twice is harmless
        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
    }

    thread_local! {
        static VISIBLE: Cell<usize> = const { Cell::new(0) };
    }

    fn Harness() -> Element {
        let toasts = use_context_provider(|| Signal::new(Toasts::default()));
        let mut open = use_signal(|| true);
        VISIBLE.with(|visible| visible.set(toasts.read().items().len()));

        rsx! {
            if open() {
                SelfClosing { on_done: move |_| open.set(false) }
            }
        }
    }

    /// Toasts, then asks its parent to unmount it.
    #[component]
    fn SelfClosing(on_done: EventHandler<()>) -> Element {
        let toasts = use_toasts();
        use_hook(move || {
            spawn(async move {
                notify(toasts, ToastKind::Success, "Awesome!", Some("Your commitment has been saved!"));
                on_done.call(());
            })
        });

        rsx! { p { "saving" } }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_its_caller_unmounts() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let mut most_visible = 0;
        for _ in 0..100 {
            tokio::select! {
                _ = dom.wait_for_work() => {}
                _ = tokio::time::sleep(Duration::from_millis(100)) => {}
            }
            dom.render_immediate(&mut NoOpMutations);
            most_visible = most_visible.max(VISIBLE.with(Cell::get));
        }

        assert_eq!(most_visible, 1, "toast was never shown");
        assert_eq!(VISIBLE.with(Cell::get), 0, "toast outlived its lifetime");
    }
}
