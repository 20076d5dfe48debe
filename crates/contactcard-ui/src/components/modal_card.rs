//! Modal Card
//!
//! Card that opens the contact dialog when clicked.

use dioxus::prelude::*;

use super::card_content::CardContent;
use super::contact_card::CardVariant;
use super::disclosure::use_disclosure;
use super::link_cards::CardAnchor;
use super::modal::ModalForm;

/// Card wrapped in a dialog trigger.
///
/// Each instance owns its own dialog state: clicking the card opens the
/// dialog, the close controls (or overlay/Escape) close it again.
#[component]
pub fn ModalCard(
    title: String,
    blurb: String,
    #[props(default = None)] public_id: Option<String>,
    #[props(default = None)] cloud_name: Option<String>,
    /// Heading shown inside the dialog
    #[props(default = None)]
    modal_title: Option<String>,
    /// Bottom margin of the card (any CSS length)
    #[props(default = None)]
    margin: Option<String>,
) -> Element {
    let mut disclosure = use_disclosure();
    let margin_style = margin
        .map(|m| format!("margin-bottom: {};", m))
        .unwrap_or_default();
    let variant = CardVariant::Modal {
        modal_title: modal_title.clone(),
    };

    rsx! {
        CardAnchor {
            variant,
            class: "modal-card",
            style: margin_style,
            onclick: move |_| disclosure.on_open(),
            CardContent { title, blurb, public_id, cloud_name }
        }
        ModalForm { disclosure, title: modal_title }
    }
}
