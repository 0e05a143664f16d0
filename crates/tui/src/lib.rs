//! # Tech Events terminal host
//!
//! Hosts the navigation state machine from `techevents-nav` in a terminal:
//! a simulated events page with three sections, a header that elevates on
//! scroll and highlights the section in view, and a mobile menu overlay for
//! narrow terminals.
//!
//! ## Architecture
//!
//! - [`page`] lays out the sections and tracks the scroll position.
//! - [`host`] implements the navigation `Environment` on top of the page and
//!   terminal input.
//! - `app` owns both plus the mounted navigation component and routes the
//!   navigation requests it emits.
//! - `ui` draws everything with ratatui and runs the event loop.

mod app;
pub mod host;
pub mod page;
mod ui;

use anyhow::Result;
use techevents_util::Settings;

/// Runs the terminal host until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be put into raw mode or the alternate
/// screen, or when drawing fails. The terminal is restored either way.
pub async fn run(settings: Settings) -> Result<()> {
    ui::runtime::run_app(settings).await
}
