// Chronos Board Application
// Main entry point

mod grid;
mod models;
mod services;
mod ui_egui;
mod utils;

use anyhow::{Context, Result};

use crate::services::database::{default_database_path, Database};
use crate::ui_egui::ChronosApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Chronos Board");

    let db_path = default_database_path()?;
    let database = Database::new(db_path.to_str().context("Database path is not valid UTF-8")?)?;
    database.initialize_schema()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Chronos Board"),
        ..Default::default()
    };

    eframe::run_native(
        "Chronos Board",
        options,
        Box::new(move |cc| Ok(Box::new(ChronosApp::new(cc, database)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to launch UI: {}", err))
}
