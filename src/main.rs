//! Circulib driver - loads the inventory and runs the circulation workflow

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circulib::{
    config::AppConfig, ingest, models::User, services::CirculationService, store::CatalogStore,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("circulib={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Circulib v{}", env!("CARGO_PKG_VERSION"));

    // Load inventory from CSV; a failed load is fatal, no partial catalog
    let mut store = CatalogStore::new();
    let loaded = match ingest::load_inventory_from_path(&mut store, &config.inventory.path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(path = %config.inventory.path, "error loading inventory: {e}");
            return Err(e.into());
        }
    };
    tracing::info!(loaded, path = %config.inventory.path, "inventory loaded");

    let service = CirculationService::new(store);
    let alice = User::new("Alice");

    // Borrow an item
    service.borrow(1, &alice);

    // Return an item
    service.return_item(1, &alice);

    // Check if something borrowed on a fixed date would be overdue
    let borrowed_date = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
    let overdue = service.is_overdue(borrowed_date);
    println!("Is item overdue? {overdue}");

    Ok(())
}
