#![allow(non_snake_case)]

mod app;
mod config;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::CardDeck;

/// Card deck loaded at startup, read by the root component
static DECK: OnceLock<CardDeck> = OnceLock::new();

/// Get the card deck (loaded from command line or default)
pub fn get_deck() -> CardDeck {
    DECK.get().cloned().unwrap_or_default()
}

/// Contact Cards - "contact us" page viewer
#[derive(Parser, Debug)]
#[command(name = "contactcard-desktop")]
#[command(about = "Render a deck of contact cards in a desktop window")]
struct Args {
    /// JSON card deck (defaults to <config dir>/contactcard/cards.json)
    #[arg(short, long)]
    cards: Option<PathBuf>,

    /// Default image namespace for cards without one
    #[arg(long)]
    cloud_name: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 700.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut deck = CardDeck::load(args.cards.as_deref()).context("Failed to load card deck")?;
    if args.cloud_name.is_some() {
        deck.cloud_name = args.cloud_name;
    }

    tracing::info!(
        "Starting with {} cards (image namespace: {:?})",
        deck.cards.len(),
        deck.cloud_name
    );

    let _ = DECK.set(deck);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Contact Us")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
