//! Fixed-position stack of transient notifications.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Push a toast and schedule its removal after the kind's lifetime.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = String::new();
    toasts.update(|s| id = s.push(kind, message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(kind.lifetime()).await;
        toasts.update(|s| s.dismiss(&id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Renders every queued toast; clicking one dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast: &Toast| toast.id.clone()
                children=move |toast: Toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=toast_class(toast.kind) on:click=move |_| toasts.update(|s| s.dismiss(&id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
