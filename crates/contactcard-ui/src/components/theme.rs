//! Theme tokens
//!
//! Typographic and color tokens read by the card components. Hosts provide
//! a [`Theme`] through context; components fall back to [`Theme::default`]
//! when none is mounted.

use dioxus::prelude::*;

/// Font family tokens
#[derive(Clone, PartialEq, Debug)]
pub struct Fonts {
    pub heading: String,
}

/// Font size tokens
#[derive(Clone, PartialEq, Debug)]
pub struct FontSizes {
    pub paragraph: String,
    pub heading: String,
}

/// Fixed card colors
#[derive(Clone, PartialEq, Debug)]
pub struct CardColors {
    /// Background behind the title and blurb
    pub text_background: String,
    pub heading: String,
    pub blurb: String,
    /// Background of the "no image" placeholder
    pub placeholder: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Theme {
    pub fonts: Fonts,
    pub font_sizes: FontSizes,
    pub colors: CardColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fonts: Fonts {
                heading: "'Montserrat', 'Helvetica Neue', sans-serif".to_string(),
            },
            font_sizes: FontSizes {
                paragraph: "1rem".to_string(),
                heading: "1.25rem".to_string(),
            },
            colors: CardColors {
                text_background: "#001514".to_string(),
                heading: "white".to_string(),
                blurb: "#F7F7F2".to_string(),
                placeholder: "#414A4C".to_string(),
            },
        }
    }
}

impl Theme {
    /// Inline style for the card title
    pub fn heading_style(&self) -> String {
        format!(
            "color: {}; font-family: {}; font-size: {};",
            self.colors.heading, self.fonts.heading, self.font_sizes.heading
        )
    }

    /// Inline style for the card blurb
    pub fn blurb_style(&self) -> String {
        format!(
            "color: {}; font-family: {}; font-size: {};",
            self.colors.blurb, self.fonts.heading, self.font_sizes.paragraph
        )
    }
}

/// Read the theme from context, or the default tokens
pub fn use_theme() -> Theme {
    try_use_context::<Theme>().unwrap_or_default()
}
