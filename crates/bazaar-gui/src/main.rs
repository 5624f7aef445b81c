//! Bazaar Admin Studio - Desktop Back-Office Application
//!
//! A desktop application for administering an e-commerce storefront:
//! products, inventory, orders, content, and customer communication over
//! the storefront's REST API.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bazaar_api::{ApiClient, ApiConfig};
use bazaar_gui::app::App;
use bazaar_gui::config::Settings;

/// Application entry point.
pub fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();
    tracing::info!(api = %settings.api_base_url, "Starting Bazaar Admin Studio");

    let api = Arc::new(
        ApiClient::new(&ApiConfig {
            base_url: settings.api_base_url.clone(),
        })
        .context("building the API client")?,
    );

    iced::application(
        move || App::new(api.clone(), settings.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .font(iced_fonts::LUCIDE_FONT_BYTES)
    .window(iced::window::Settings {
        size: iced::Size::new(1280.0, 800.0),
        min_size: Some(iced::Size::new(1024.0, 600.0)),
        ..Default::default()
    })
    .run()
    .context("running the application")
}
