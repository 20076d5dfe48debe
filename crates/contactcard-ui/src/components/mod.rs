//! Contact card components
//!
//! Leaves first: image and placeholder, the shared content layout, the
//! dialog pieces, the three clickable variants and finally the selector.

mod button;
mod card_content;
mod contact_card;
mod disclosure;
mod image;
mod link_cards;
mod modal;
mod modal_card;
mod styles;
mod theme;

pub use button::*;
pub use card_content::*;
pub use contact_card::*;
pub use disclosure::*;
pub use image::*;
pub use link_cards::*;
pub use modal::*;
pub use modal_card::*;
pub use styles::*;
pub use theme::*;
