//! Contact Card
//!
//! Public entry point. Picks one of the three card variants for the same
//! content: business owners get a dialog, general inquiries get a mailto
//! link, and the default is the volunteer invite.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::link_cards::{mailto_href, MailtoCard, VolunteerCard, VOLUNTEER_INVITE_URL};
use super::modal_card::ModalCard;

/// Presentation content shared by every variant
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CardData {
    pub title: String,
    pub blurb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
}

/// Which clickable container wraps the card
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardVariant {
    /// Opens a dialog titled `modal_title`
    Modal {
        #[serde(default)]
        modal_title: Option<String>,
    },
    /// Links to `mailto:{email}`
    Mailto {
        #[serde(default)]
        email: String,
    },
    /// Links to the community invite
    #[default]
    Volunteer,
}

impl CardVariant {
    /// Map the legacy `modal_card` / `mailto_card` flags onto a variant.
    ///
    /// `modal_card` is checked first, so it wins when both are set.
    pub fn from_flags(
        modal_card: bool,
        mailto_card: bool,
        modal_title: Option<String>,
        email: Option<String>,
    ) -> Self {
        if modal_card {
            CardVariant::Modal { modal_title }
        } else if mailto_card {
            CardVariant::Mailto {
                email: email.unwrap_or_default(),
            }
        } else {
            CardVariant::Volunteer
        }
    }

    /// Anchor target of the rendered card
    pub fn href(&self) -> String {
        match self {
            CardVariant::Modal { .. } => "#".to_string(),
            CardVariant::Mailto { email } => mailto_href(email),
            CardVariant::Volunteer => VOLUNTEER_INVITE_URL.to_string(),
        }
    }

    /// Whether the card navigates away from the page
    pub fn is_external(&self) -> bool {
        !matches!(self, CardVariant::Modal { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardVariant::Modal { .. } => "modal",
            CardVariant::Mailto { .. } => "mailto",
            CardVariant::Volunteer => "volunteer",
        }
    }
}

/// Contact card for business owners, general inquiries and volunteers.
///
/// Renders the volunteer card unless another variant is chosen.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ContactCard {
///         title: "General inquiries".to_string(),
///         blurb: "Questions about the project? Drop us a line.".to_string(),
///         public_id: "contact/inbox".to_string(),
///         cloud_name: "demo".to_string(),
///         variant: CardVariant::Mailto { email: "hello@example.org".to_string() },
///     }
/// }
/// ```
#[component]
pub fn ContactCard(
    /// The card's title
    title: String,
    /// The card's blurb
    blurb: String,
    /// Image asset identifier; no image is shown when absent
    #[props(default = None)]
    public_id: Option<String>,
    /// Image namespace
    #[props(default = None)]
    cloud_name: Option<String>,
    #[props(default)] variant: CardVariant,
    /// Bottom margin, only used by the modal variant
    #[props(default = None)]
    margin: Option<String>,
) -> Element {
    tracing::trace!(variant = variant.name(), %title, "rendering contact card");

    match variant {
        CardVariant::Modal { modal_title } => rsx! {
            ModalCard { title, blurb, public_id, cloud_name, modal_title, margin }
        },
        CardVariant::Mailto { email } => rsx! {
            MailtoCard { title, blurb, public_id, cloud_name, email }
        },
        // cloud_name is not forwarded; the renderer's default namespace applies
        CardVariant::Volunteer => rsx! {
            VolunteerCard { title, blurb, public_id }
        },
    }
}
