use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use restaurant_lookup::config::Settings;
use restaurant_lookup::{RestaurantService, SearchCriteria};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = Settings::new().context("Failed to load settings")?;
    let criteria: SearchCriteria = settings
        .lookup
        .take()
        .context("No lookup section configured")?
        .into();

    let service = RestaurantService::from_settings(settings)?;
    let start_time = std::time::Instant::now();

    let restaurants = service
        .get_nearby_restaurants(&criteria)
        .await
        .context("Nearby restaurant lookup failed")?;

    info!(
        count = restaurants.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Lookup finished"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &restaurants)?;
    writeln!(out)?;

    Ok(())
}
