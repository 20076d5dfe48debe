//! Contact Card UI Components
//!
//! Dioxus components for the "contact us" card: a shared content layout
//! (image or placeholder, title, blurb) wrapped in one of three clickable
//! containers.
//!
//! ## Variants
//!
//! - **Modal**: clicking the card opens a dialog
//! - **Mailto**: the card is a `mailto:` link
//! - **Volunteer**: the card links to the community invite
//!
//! ## Injected capabilities
//!
//! The image renderer, the theme tokens and the dialog state are read from
//! context (or props) so hosts can swap them out:
//!
//! ```rust,ignore
//! use_context_provider(|| ImageProvider::new(CloudinaryImage::new("demo")));
//! use_context_provider(Theme::default);
//! ```

pub mod components;

pub use components::*;
