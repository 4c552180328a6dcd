use anyhow::{Context, Result};
use slotgrid::config::Config;
use slotgrid::logger::Logger;
use slotgrid::ui;

#[tokio::main]
async fn main() -> Result<()> {
    // Write a default configuration and exit
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter()?)?;
    log::info!("Starting slotgrid {}", env!("CARGO_PKG_VERSION"));

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
