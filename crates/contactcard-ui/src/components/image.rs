//! Card Image
//!
//! The image renderer is an injected capability: anything implementing
//! [`ImageRenderer`] can be provided through [`ImageProvider`]. Without a
//! provider the cards render Cloudinary URLs via [`CloudinaryImage`].

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

use super::theme::use_theme;

const CLOUDINARY_BASE: &str = "https://res.cloudinary.com";

/// Renders an image asset given its namespace and identifier
pub trait ImageRenderer {
    fn render(&self, cloud_name: Option<&str>, public_id: &str) -> Element;
}

/// Context wrapper around a shared [`ImageRenderer`]
#[derive(Clone)]
pub struct ImageProvider(Rc<dyn ImageRenderer>);

impl ImageProvider {
    pub fn new(renderer: impl ImageRenderer + 'static) -> Self {
        Self(Rc::new(renderer))
    }

    pub fn render(&self, cloud_name: Option<&str>, public_id: &str) -> Element {
        self.0.render(cloud_name, public_id)
    }
}

impl Default for ImageProvider {
    fn default() -> Self {
        Self::new(CloudinaryImage::default())
    }
}

impl fmt::Debug for ImageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImageProvider")
    }
}

/// Read the image renderer from context, or the Cloudinary default
pub fn use_image_renderer() -> ImageProvider {
    try_use_context::<ImageProvider>().unwrap_or_default()
}

/// Default renderer: an `img` pointing at the Cloudinary delivery URL
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CloudinaryImage {
    /// Namespace used when the card does not carry one
    default_cloud: Option<String>,
}

impl CloudinaryImage {
    pub fn new(default_cloud: impl Into<String>) -> Self {
        Self {
            default_cloud: Some(default_cloud.into()),
        }
    }

    /// Delivery URL for an asset
    pub fn url(&self, cloud_name: Option<&str>, public_id: &str) -> String {
        let cloud = cloud_name
            .filter(|c| !c.is_empty())
            .or(self.default_cloud.as_deref())
            .unwrap_or_default();
        format!("{}/{}/image/upload/{}", CLOUDINARY_BASE, cloud, public_id)
    }
}

impl ImageRenderer for CloudinaryImage {
    fn render(&self, cloud_name: Option<&str>, public_id: &str) -> Element {
        let src = self.url(cloud_name, public_id);
        rsx! {
            img {
                class: "card-image__img",
                src: "{src}",
                alt: "{public_id}",
            }
        }
    }
}

/// Which image block a card shows
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ImageSlot {
    Image {
        public_id: String,
        cloud_name: Option<String>,
    },
    Placeholder,
}

impl ImageSlot {
    /// An absent or empty `public_id` selects the placeholder; the cloud
    /// name is ignored in that case.
    pub fn resolve(public_id: Option<&str>, cloud_name: Option<&str>) -> Self {
        match public_id {
            Some(id) if !id.is_empty() => ImageSlot::Image {
                public_id: id.to_string(),
                cloud_name: cloud_name.map(str::to_string),
            },
            _ => ImageSlot::Placeholder,
        }
    }
}

/// Image delegated to the injected renderer, in a clipped 220px-high frame
#[component]
pub fn CardImage(public_id: String, #[props(default)] cloud_name: Option<String>) -> Element {
    let renderer = use_image_renderer();

    rsx! {
        div { class: "card-image",
            {renderer.render(cloud_name.as_deref(), &public_id)}
        }
    }
}

/// Placeholder shown when a card has no image
#[component]
pub fn NoImage() -> Element {
    let background = use_theme().colors.placeholder;

    rsx! {
        div {
            class: "card-no-image",
            style: "background-color: {background};",
            div { class: "card-no-image__inner",
                p { "No image available" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_public_id_selects_placeholder() {
        assert_eq!(ImageSlot::resolve(None, Some("demo")), ImageSlot::Placeholder);
        assert_eq!(ImageSlot::resolve(Some(""), Some("demo")), ImageSlot::Placeholder);
    }

    #[test]
    fn public_id_selects_image() {
        assert_eq!(
            ImageSlot::resolve(Some("team/photo"), Some("demo")),
            ImageSlot::Image {
                public_id: "team/photo".to_string(),
                cloud_name: Some("demo".to_string()),
            }
        );
    }

    #[test]
    fn cloudinary_url_prefers_card_namespace() {
        let renderer = CloudinaryImage::new("fallback");
        assert_eq!(
            renderer.url(Some("demo"), "team/photo"),
            "https://res.cloudinary.com/demo/image/upload/team/photo"
        );
        assert_eq!(
            renderer.url(None, "team/photo"),
            "https://res.cloudinary.com/fallback/image/upload/team/photo"
        );
    }
}
