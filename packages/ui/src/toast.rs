//! Transient notifications.
//!
//! Toasts are kept newest first in a [`Toasts`] signal provided by
//! [`ToastProvider`]. [`notify`] pushes one and schedules its removal after
//! the configured duration; the close button removes it early. The removal
//! task belongs to the root scope, so it still runs after the component that
//! raised the toast has unmounted.

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::time::sleep_ms;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
    pub duration_ms: u64,
}

impl Toasts {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            duration_ms,
        }
    }

    /// Add a toast on top. Returns its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            Toast {
                id,
                kind,
                title: title.to_string(),
                description: description.to_string(),
            },
        );
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast and dismiss it once the configured duration has passed.
pub fn notify(toasts: &mut Signal<Toasts>, kind: ToastKind, title: &str, description: &str) {
    let id = toasts.write().push(kind, title, description);
    let duration = toasts.peek().duration_ms;
    let mut toasts = *toasts;
    spawn_forever(async move {
        sleep_ms(duration).await;
        toasts.write().dismiss(id);
    });
}

#[component]
pub fn ToastProvider(duration_ms: u64, children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::new(duration_ms)));

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries().to_vec();

    rsx! {
        div {
            class: "toast-viewport",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                        ToastKind::Info => "toast info",
                    },
                    span {
                        class: "toast-icon",
                        {toast_icon(toast.kind)}
                    }
                    div {
                        class: "toast-body",
                        p { class: "toast-title", "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { class: "toast-description", "{toast.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        onclick: move |_| {
                            toasts.write().dismiss(toast.id);
                        },
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

fn toast_icon(kind: ToastKind) -> Element {
    match kind {
        ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ToastKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    }
}
