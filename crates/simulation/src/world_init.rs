//! Startup seeding: catalog generation, initial stock placement, boot log
//! entry, and initial selection.

use bevy::prelude::*;

use crate::activity_log::ActivityLog;
use crate::inventory::InventoryStore;
use crate::sectors::SectorCatalog;
use crate::selection::SelectedSector;

/// Entry pushed to the activity log before any movement happens.
pub const BOOT_LOG_ENTRY: &str = "System initialized · all sectors online";

/// Builds the sector catalog, seeds one inventory record per sector, and
/// selects the first sector. Runs once at startup; the catalog never
/// changes afterwards.
pub fn init_warehouse(mut commands: Commands) {
    let catalog = SectorCatalog::default();
    let inventory = InventoryStore::seeded(&catalog);
    let mut log = ActivityLog::default();
    log.push(BOOT_LOG_ENTRY.to_string());

    let first_sector = catalog.sectors[0].id;
    info!(
        "warehouse online: {} sectors, {}/{} units in stock",
        catalog.len(),
        inventory.total_stock(),
        catalog.total_capacity()
    );

    commands.insert_resource(inventory);
    commands.insert_resource(log);
    commands.insert_resource(SelectedSector(first_sector));
    commands.insert_resource(catalog);
}
