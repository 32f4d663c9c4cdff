//! # Foodtuck Navigation Surface
//!
//! Terminal rendition of the Foodtuck site's navigation bar: the fixed menu,
//! live product search over the catalog fetched at startup, and a cart badge
//! that follows the locally stored cart.
//!
//! ## Architecture
//!
//! Each element (menu, search box, cart badge, menu sheet) is a component
//! that handles its own events and renders itself. Components never navigate
//! directly; they return effects that the runtime hands to a [`Router`].

mod app;
pub mod router;
mod ui;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use foodtuck_api::ContentSource;
use foodtuck_util::LocalStorage;

pub use router::{HistoryRouter, Router};

/// Everything the surface needs from its host.
#[derive(Debug)]
pub struct NavContext {
    /// Where the product catalog is fetched from, once per mount
    pub content: Arc<dyn ContentSource>,
    /// Storage holding the `cart` entry
    pub storage: Arc<dyn LocalStorage>,
    /// How often the cart entry is re-read
    pub cart_poll_interval: Duration,
}

/// Runs the navigation surface until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode, or when drawing fails.
pub async fn run(context: NavContext) -> Result<()> {
    ui::runtime::run_app(context).await
}
