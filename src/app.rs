use dioxus::prelude::*;

use contactcard_ui::{CloudinaryImage, ImageProvider, Theme, CARD_STYLES};

use crate::get_deck;
use crate::pages::About;
use crate::theme::PAGE_STYLES;

/// Root application component.
///
/// Provides the stylesheets, the theme tokens and the image renderer, then
/// renders the contact page.
#[component]
pub fn App() -> Element {
    let deck = use_hook(get_deck);

    let cloud_name = deck.cloud_name.clone();
    use_context_provider(move || match cloud_name {
        Some(cloud) => ImageProvider::new(CloudinaryImage::new(cloud)),
        None => ImageProvider::default(),
    });
    use_context_provider(Theme::default);

    rsx! {
        style { {PAGE_STYLES} }
        style { {CARD_STYLES} }
        About { cards: deck.cards }
    }
}
