//! Page theme for the contact cards shell.

mod styles;

pub use styles::PAGE_STYLES;
