//! Inventory import/export as pretty-printed JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};

use gildedrose_inventory::Inventory;

/// File name timestamp layout: year, day, month, then time of day.
pub const TIMESTAMP_FORMAT: &str = "%Y%d%m-%H%M%S";

pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("inventory_{}.txt", at.format(TIMESTAMP_FORMAT))
}

/// Write `inventory` into `dir` as `inventory_<timestamp>.txt`, creating `dir`
/// if needed. Returns the path written.
pub fn write_export(
    inventory: &Inventory,
    dir: &Path,
    at: DateTime<Local>,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(export_file_name(at));
    let body = serde_json::to_string_pretty(inventory).context("failed to serialize inventory")?;
    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = inventory.len(), "inventory exported");
    Ok(path)
}

pub fn load_inventory(path: &Path) -> anyhow::Result<Inventory> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let inventory: Inventory = serde_json::from_str(&raw)
        .with_context(|| format!("invalid inventory file {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = inventory.len(), "inventory loaded");
    Ok(inventory)
}
