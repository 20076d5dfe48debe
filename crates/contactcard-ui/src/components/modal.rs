//! Modal Dialog
//!
//! [`Modal`] is the dialog primitive: an overlay that closes on click or
//! Escape, with the content panel shielding its own clicks.
//! [`ModalForm`] is the contact dialog shell built on top of it.

use dioxus::prelude::*;

use super::button::{Button, CloseButton};
use super::disclosure::Disclosure;

/// Placeholder body of the contact dialog
pub const MODAL_BODY_PLACEHOLDER: &str = "Some text here";

/// Keys that dismiss an open dialog
pub fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Escape)
}

/// Dialog primitive bound to a [`Disclosure`]. Renders nothing while closed.
#[component]
pub fn Modal(disclosure: Disclosure, children: Element) -> Element {
    if !disclosure.is_open() {
        return rsx! {};
    }

    let mut disclosure = disclosure;

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "-1",
            // Escape only reaches onkeydown while focus is inside the overlay
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::debug!("could not focus dialog: {:?}", e);
                }
            },
            onclick: move |_| disclosure.on_close(),
            onkeydown: move |evt: KeyboardEvent| {
                if is_dismiss_key(&evt.key()) {
                    disclosure.on_close();
                }
            },

            section {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                {children}
            }
        }
    }
}

/// Contact dialog: title header, placeholder body, close controls
///
/// # Example
///
/// ```rust,ignore
/// let disclosure = use_disclosure();
///
/// rsx! {
///     ModalForm { disclosure, title: "Business owners".to_string() }
/// }
/// ```
#[component]
pub fn ModalForm(disclosure: Disclosure, #[props(default)] title: Option<String>) -> Element {
    let mut close = disclosure;
    let title = title.unwrap_or_default();

    rsx! {
        Modal { disclosure,
            header { class: "modal-header",
                h2 { class: "modal-title", "{title}" }
                CloseButton { onclick: move |_| close.on_close() }
            }
            div { class: "modal-body", "{MODAL_BODY_PLACEHOLDER}" }
            footer { class: "modal-footer",
                Button {
                    class: "m-3".to_string(),
                    onclick: move |_| close.on_close(),
                    "Close"
                }
            }
        }
    }
}
