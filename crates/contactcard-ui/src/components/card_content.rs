//! Card Content
//!
//! Layout shared by every card variant: image (or placeholder) on top,
//! then the title and blurb on a dark band.

use dioxus::prelude::*;

use super::image::{CardImage, ImageSlot, NoImage};
use super::theme::use_theme;

/// Image block followed by the title and blurb.
///
/// The text band is always rendered, even when `title` or `blurb` is empty.
#[component]
pub fn CardContent(
    /// Card heading
    title: String,
    /// Short description below the heading
    blurb: String,
    /// Image asset identifier
    #[props(default = None)]
    public_id: Option<String>,
    /// Image namespace passed to the renderer
    #[props(default = None)]
    cloud_name: Option<String>,
) -> Element {
    let theme = use_theme();
    let heading_style = theme.heading_style();
    let blurb_style = theme.blurb_style();
    let band_color = theme.colors.text_background.clone();

    let image = match ImageSlot::resolve(public_id.as_deref(), cloud_name.as_deref()) {
        ImageSlot::Image { public_id, cloud_name } => rsx! {
            CardImage { public_id, cloud_name }
        },
        ImageSlot::Placeholder => rsx! { NoImage {} },
    };

    rsx! {
        {image}
        div {
            class: "card-text",
            style: "background-color: {band_color};",
            h5 { class: "card-title", style: "{heading_style}", "{title}" }
            p { class: "card-blurb", style: "{blurb_style}", "{blurb}" }
        }
    }
}
