//! Page components for the contact cards shell.

mod about;

pub use about::About;
