//! About page - "Get in touch" section with one card per contact route.

use dioxus::prelude::*;

use contactcard_ui::ContactCard;

use crate::config::DeckCard;

/// Sibling key for a card; decks may repeat titles
fn card_key(index: usize, card: &DeckCard) -> String {
    format!("{}-{}", index, card.data.title)
}

/// Contact page.
///
/// Renders every card of the deck with its configured variant.
#[component]
pub fn About(cards: Vec<DeckCard>) -> Element {
    rsx! {
        main { class: "about",
            header { class: "about-header",
                h1 { class: "page-title", "Get in touch" }
                p { class: "page-subtitle", "Pick the card that fits you best." }
            }
            div { class: "card-grid",
                for (index, card) in cards.iter().enumerate() {
                    {
                        let key = card_key(index, card);
                        rsx! {
                            ContactCard {
                                key: "{key}",
                                title: card.data.title.clone(),
                                blurb: card.data.blurb.clone(),
                                public_id: card.data.public_id.clone(),
                                cloud_name: card.data.cloud_name.clone(),
                                variant: card.variant.clone(),
                                margin: card.margin.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardDeck;

    #[test]
    fn repeated_titles_get_distinct_keys() {
        let mut cards = CardDeck::default().cards;
        cards.push(cards[0].clone());

        let keys: Vec<_> = cards
            .iter()
            .enumerate()
            .map(|(index, card)| card_key(index, card))
            .collect();
        let mut unique = keys.clone();
        unique.sort();
        unique.dedup();

        assert_eq!(unique.len(), cards.len());
        assert_ne!(keys[0], keys[3]);
    }
}
