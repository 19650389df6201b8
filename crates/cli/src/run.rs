use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;

use gildedrose_inventory::Inventory;

use crate::config::Config;
use crate::export::{load_inventory, write_export};
use crate::seed::seed_inventory;

/// Load (or seed) the inventory, advance it `config.days` days, and export it.
/// Returns the export path.
pub fn run(config: &Config) -> anyhow::Result<PathBuf> {
    let mut inventory = match &config.inventory_path {
        Some(path) => load_inventory(path)?,
        None => seed_inventory(),
    };

    advance(&mut inventory, config.days);

    write_export(&inventory, &config.output_dir, Local::now())
        .context("failed to export inventory")
}

fn advance(inventory: &mut Inventory, days: u32) {
    for day in 1..=days {
        tracing::info!(day, items = inventory.len(), "Updating inventory");
        inventory.tick();
        tracing::info!(day, "Inventory update complete");
    }
}
