//! Transient toast notifications.
//!
//! Toasts are pushed by event handlers, stacked in a corner overlay, and
//! removed either by their auto-dismiss timer or the per-toast button.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::TOAST_DISMISS_MS;
use crate::types::{Toast, ToastLevel};

static NEXT_TOAST_ID: AtomicU32 = AtomicU32::new(0);

/// Push a toast and schedule its auto-dismissal.
pub fn push_toast(set_toasts: WriteSignal<Vec<Toast>>, level: ToastLevel, message: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    set_toasts.update(|toasts| {
        toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DISMISS_MS).await;
        set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    });
}

/// Overlay rendering the active toasts.
#[component]
pub fn ToastStack(
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="toast-stack" id="toastStack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span class="toast-message">{toast.message}</span>
                            <button
                                class="toast-dismiss"
                                on:click=move |_| {
                                    set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id))
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
