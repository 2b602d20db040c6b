use iced::Size;

mod app;
mod config;
mod error;
mod request;
mod state;
mod ui;
mod uplink;

use app::Dashboard;
use config::AppConfig;
use request::BrowserNavigator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_module("orbital_command", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // A missing or placeholder submission sink is fatal
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Configuration error: {}", e);
            return Err(Box::new(e));
        }
    };

    log::info!(
        "🌍 Orbital Command starting (dataset: {}, submissions: {})",
        config.dataset.describe(),
        config.submission_url.host_str().unwrap_or("?")
    );

    iced::application("Orbital Command", Dashboard::update, Dashboard::view)
        .theme(Dashboard::theme)
        .window_size(Size::new(1280.0, 860.0))
        .centered()
        .run_with(move || Dashboard::new(config, Box::new(BrowserNavigator)))?;

    Ok(())
}
