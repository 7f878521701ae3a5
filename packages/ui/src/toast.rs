//! Transient toast notifications.
//!
//! Every user-visible outcome in the app is reported through these: a title
//! line plus a smaller description, stacked bottom-right, auto-dismissed
//! after a few seconds or on click.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Handle for raising toasts from event handlers and async tasks.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<Toast>>,
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Info, title.into(), description.into());
    }

    fn push(&mut self, kind: ToastKind, title: String, description: String) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        self.items.write().push(Toast {
            id,
            kind,
            title,
            description,
        });

        let mut items = self.items;
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(DISMISS_AFTER).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(DISMISS_AFTER).await;

            items.write().retain(|t| t.id != id);
        });
    }
}

/// Provides the [`Toasts`] context and renders the stack. Wrap the app with
/// this above anything that calls [`use_toasts`].
#[component]
pub fn Toaster(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    use_context_provider(|| Toasts { items });

    rsx! {
        {children}

        div { class: "toast-stack",
            for toast in items() {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.kind.class()}",
                    onclick: {
                        let id = toast.id;
                        let mut items = items;
                        move |_| items.write().retain(|t| t.id != id)
                    },
                    div { class: "toast-title", "{toast.title}" }
                    if !toast.description.is_empty() {
                        div { class: "toast-description", "{toast.description}" }
                    }
                }
            }
        }
    }
}
