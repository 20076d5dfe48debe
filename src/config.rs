//! Card deck configuration.
//!
//! The desktop shell renders a deck of contact cards read from a JSON file:
//!
//! ```json
//! {
//!   "cloud_name": "demo",
//!   "cards": [
//!     {
//!       "title": "General inquiries",
//!       "blurb": "Questions? Drop us a line.",
//!       "public_id": "contact/inbox",
//!       "variant": { "kind": "mailto", "email": "hello@example.org" }
//!     }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use contactcard_ui::{CardData, CardVariant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading a card deck
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The deck file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deck file is not valid JSON for a deck
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The deck parsed but holds no cards
    #[error("Card deck {0} contains no cards")]
    EmptyDeck(PathBuf),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// One card in the deck: content plus the variant wrapping it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckCard {
    #[serde(flatten)]
    pub data: CardData,
    #[serde(default)]
    pub variant: CardVariant,
    /// Bottom margin for modal cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDeck {
    /// Default image namespace for cards that don't carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,
    pub cards: Vec<DeckCard>,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self {
            cloud_name: None,
            cards: vec![
                DeckCard {
                    data: CardData {
                        title: "Business Owners".to_string(),
                        blurb: "Want to partner with us? Tell us about your business.".to_string(),
                        ..Default::default()
                    },
                    variant: CardVariant::Modal {
                        modal_title: Some("Partner with us".to_string()),
                    },
                    margin: None,
                },
                DeckCard {
                    data: CardData {
                        title: "General Inquiry".to_string(),
                        blurb: "Questions, comments or ideas? Send us an email.".to_string(),
                        ..Default::default()
                    },
                    variant: CardVariant::Mailto {
                        email: "support@example.org".to_string(),
                    },
                    margin: None,
                },
                DeckCard {
                    data: CardData {
                        title: "Volunteers".to_string(),
                        blurb: "Join the community and help build the project.".to_string(),
                        ..Default::default()
                    },
                    variant: CardVariant::Volunteer,
                    margin: None,
                },
            ],
        }
    }
}

impl CardDeck {
    /// Default deck location: `<config_dir>/contactcard/cards.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("contactcard").join("cards.json"))
    }

    /// Read and parse a deck file
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let deck: CardDeck =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if deck.cards.is_empty() {
            return Err(ConfigError::EmptyDeck(path.to_path_buf()));
        }

        Ok(deck)
    }

    /// Load the deck from `path` (or the default location).
    ///
    /// A missing file yields the built-in deck. An explicit path that fails
    /// to load is an error; a broken default file is logged and replaced by
    /// the built-in deck.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = path {
            return Self::from_path(path);
        }

        let Some(path) = Self::default_path() else {
            return Ok(CardDeck::default());
        };

        if !path.exists() {
            tracing::debug!("No card deck at {:?}, using built-in deck", path);
            return Ok(CardDeck::default());
        }

        match Self::from_path(&path) {
            Ok(deck) => Ok(deck),
            Err(e) => {
                tracing::warn!("{}; using built-in deck", e);
                Ok(CardDeck::default())
            }
        }
    }
}
