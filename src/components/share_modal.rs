//! Commitment Modal Component
//!
//! Opened from "I'll do this one". Records the idea as soon as it mounts,
//! offers copy and share links, and optionally attaches reminder details to
//! the recorded row.

use dioxus::prelude::*;

use chesed_core::{CommitmentRecorder, Idea, RecorderView, SharePlatform};

use super::{notify, ToastKind};
use crate::context::{use_services, use_toasts};

/// Commitment dialog.
///
/// Mounted only while open; mounting is what records the commitment. Store
/// writes run in the root scope and finish even if the dialog is closed
/// first; their results reach the dialog only while it is still mounted.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if share_open() {
///         ShareModal {
///             idea: current_idea.clone(),
///             on_close: move |_| share_open.set(false),
///         }
///     }
/// }
/// ```
#[component]
pub fn ShareModal(
    /// The idea being committed to
    idea: Idea,
    /// Callback when the dialog closes
    on_close: EventHandler<()>,
) -> Element {
    let services = use_services();
    let toasts = use_toasts();

    // Opening records the idea; the row to insert comes from the recorder
    let initial = idea.clone();
    let (mut recorder, opened) = use_hook(move || {
        let mut state = CommitmentRecorder::default();
        let new = state.open(initial);
        (Signal::new(state), new)
    });

    let store = services.store.clone();
    use_hook(move || {
        spawn_forever(async move {
            let result = store.insert_commitment(&opened).await;
            match &result {
                Ok(saved) => tracing::info!(id = saved.id, "Commitment recorded"),
                Err(e) => {
                    tracing::error!("Error saving commitment: {}", e);
                    notify(toasts, ToastKind::Error, "Error saving commitment", Some("Please try again"));
                }
            }
            update_if_open(recorder, |state| state.recorded(result.as_ref().ok()));
        });
    });

    let full_text = idea.full_text();

    let text = full_text.clone();
    let copy_to_clipboard = move |_| {
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone()));
        match result {
            Ok(()) => notify(
                toasts,
                ToastKind::Success,
                "Copied to clipboard",
                Some("You can now paste the idea anywhere!"),
            ),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                notify(toasts, ToastKind::Error, "Failed to copy", Some("Please try again"));
            }
        }
    };

    let store = services.store.clone();
    let no_reminder = move |_| {
        let pending = update_if_open(recorder, CommitmentRecorder::begin_dismiss).flatten();
        let Some(new) = pending else {
            notify(toasts, ToastKind::Success, "Awesome!", Some("Your commitment has been saved!"));
            on_close.call(());
            return;
        };

        let store = store.clone();
        spawn_forever(async move {
            let result = store.insert_commitment(&new).await;
            let still_open = update_if_open(recorder, |state| state.recorded(result.as_ref().ok())).is_some();
            match result {
                Ok(saved) => {
                    tracing::info!(id = saved.id, "Commitment recorded on dismiss");
                    notify(toasts, ToastKind::Success, "Awesome!", Some("Your commitment has been saved!"));
                    if still_open {
                        on_close.call(());
                    }
                }
                Err(e) => {
                    tracing::error!("Error saving commitment: {}", e);
                    notify(toasts, ToastKind::Error, "Error saving commitment", Some("Please try again"));
                }
            }
        });
    };

    let store = services.store.clone();
    let save_reminder = move |_| {
        let write = match update_if_open(recorder, CommitmentRecorder::begin_reminder) {
            Some(Ok(write)) => write,
            Some(Err(e)) => {
                notify(toasts, ToastKind::Error, "Missing details", Some(e.to_string().as_str()));
                return;
            }
            None => return,
        };

        let store = store.clone();
        spawn_forever(async move {
            let result = write.execute(store.as_ref()).await;
            let still_open = update_if_open(recorder, |state| state.finish_reminder(result.as_ref().ok())).is_some();
            match result {
                Ok(saved) => {
                    tracing::info!(id = saved.id, "Reminder details saved");
                    notify(
                        toasts,
                        ToastKind::Success,
                        "Awesome!",
                        Some("Your commitment has been saved and we'll send you a reminder!"),
                    );
                    if still_open {
                        on_close.call(());
                    }
                }
                Err(e) => {
                    tracing::error!("Error saving reminder: {}", e);
                    notify(toasts, ToastKind::Error, "Error saving commitment", Some("Please try again"));
                }
            }
        });
    };

    let view = recorder.read().view;
    let name = recorder.read().name.clone();
    let email = recorder.read().email.clone();
    let submitting = recorder.read().submitting;
    let can_submit = recorder.read().can_submit_reminder();
    let page_url = services.config.page_url.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content share-modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal-title", "I want to do this one!" }
                p { class: "modal-description",
                    "That's wonderful! This chesed idea has been saved."
                }
                p { class: "share-modal__idea", "{full_text}" }

                {match view {
                    RecorderView::List => rsx! {
                        div { class: "share-modal__actions",
                            button { class: "btn-outline", onclick: copy_to_clipboard, "Copy" }
                            {SharePlatform::ALL.iter().map(|platform| {
                                let label = platform.label();
                                let href = platform.url(&full_text, &page_url);
                                rsx! {
                                    a {
                                        key: "{label}",
                                        class: "btn-outline",
                                        href: "{href}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{label}"
                                    }
                                }
                            })}
                        }

                        div { class: "share-modal__reminder",
                            button {
                                class: "btn-primary",
                                onclick: move |_| recorder.write().show_reminder_form(),
                                "⏰ Send me a reminder"
                            }
                            button {
                                class: "btn-ghost",
                                disabled: submitting,
                                onclick: no_reminder,
                                "No reminder needed"
                            }
                        }
                    },
                    RecorderView::ReminderForm => rsx! {
                        div { class: "share-modal__form",
                            label { r#for: "reminder-name", "Name" }
                            input {
                                id: "reminder-name",
                                r#type: "text",
                                value: "{name}",
                                placeholder: "Your name",
                                oninput: move |e| recorder.write().name = e.value(),
                            }

                            label { r#for: "reminder-email", "Email" }
                            input {
                                id: "reminder-email",
                                r#type: "email",
                                value: "{email}",
                                placeholder: "your.email@example.com",
                                oninput: move |e| recorder.write().email = e.value(),
                            }

                            button {
                                class: "btn-primary",
                                disabled: !can_submit,
                                onclick: save_reminder,
                                if submitting { "Saving..." } else { "Save and remind me later" }
                            }
                            button {
                                class: "btn-ghost",
                                disabled: submitting,
                                onclick: move |_| recorder.write().back(),
                                "Back"
                            }
                        }
                    },
                }}
            }
        }
    }
}

/// Run `f` on the dialog state, or return `None` if the dialog has unmounted.
fn update_if_open<T>(
    mut recorder: Signal<CommitmentRecorder>,
    f: impl FnOnce(&mut CommitmentRecorder) -> T,
) -> Option<T> {
    recorder.try_write().ok().map(|mut state| f(&mut *state))
}
