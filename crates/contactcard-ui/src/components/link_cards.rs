//! Link Cards
//!
//! Stateless cards that navigate away: a `mailto:` link and the community
//! invite link. Both are marked external.

use dioxus::prelude::*;

use super::card_content::CardContent;
use super::contact_card::CardVariant;

/// Community invite the volunteer card links to
pub const VOLUNTEER_INVITE_URL: &str = "https://discord.com/invite/272XMuv";

/// `mailto:` target for an address. The address is not validated.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Anchor wrapping the card content.
///
/// Target and external marking both come from the variant, so every card
/// container links the same way [`CardVariant::href`] reports. Clicks on an
/// in-page anchor have their default navigation suppressed.
#[component]
pub(crate) fn CardAnchor(
    variant: CardVariant,
    class: &'static str,
    #[props(default)] style: String,
    #[props(default = None)] onclick: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let href = variant.href();

    if variant.is_external() {
        rsx! {
            a {
                class: "contact-card {class}",
                href: "{href}",
                style: "{style}",
                target: "_blank",
                rel: "noopener noreferrer",
                {children}
            }
        }
    } else {
        rsx! {
            a {
                class: "contact-card {class}",
                href: "{href}",
                style: "{style}",
                onclick: move |evt| {
                    evt.prevent_default();
                    if let Some(handler) = &onclick {
                        handler.call(());
                    }
                },
                {children}
            }
        }
    }
}

/// Card that starts an email to `email`
#[component]
pub fn MailtoCard(
    title: String,
    blurb: String,
    #[props(default = None)] public_id: Option<String>,
    #[props(default = None)] cloud_name: Option<String>,
    /// Recipient address
    #[props(default)]
    email: String,
) -> Element {
    let variant = CardVariant::Mailto { email };

    rsx! {
        CardAnchor { variant, class: "mailto-card",
            CardContent { title, blurb, public_id, cloud_name }
        }
    }
}

/// Card linking to the volunteer community invite
#[component]
pub fn VolunteerCard(
    title: String,
    blurb: String,
    #[props(default = None)] public_id: Option<String>,
    #[props(default = None)] cloud_name: Option<String>,
) -> Element {
    rsx! {
        CardAnchor { variant: CardVariant::Volunteer, class: "volunteer-card",
            CardContent { title, blurb, public_id, cloud_name }
        }
    }
}
