//! # Warehouse inventory simulation engine
//!
//! Headless simulation layer for a tire-warehouse visualizer: a fixed
//! catalog of storage sectors, one mutable stock record per sector, a
//! saturating movement engine with a bounded audit log, and a quantizer
//! mapping stock ratios to discrete rack fill patterns.
//!
//! State lives in resources ([`sectors::SectorCatalog`],
//! [`inventory::InventoryStore`], [`activity_log::ActivityLog`],
//! [`selection::SelectedSector`]). Front ends never mutate them directly:
//! they send [`movement::MovementRequest`] / [`selection::SelectSector`]
//! events and read the resources back, deriving display values through
//! [`inventory::InventorySummary`] and [`rack_fill::compute_fill`].

use bevy::prelude::*;

pub mod activity_log;
pub mod config;
pub mod inventory;
pub mod movement;
pub mod rack_fill;
pub mod sectors;
pub mod selection;
pub mod world_init;

#[cfg(test)]
pub mod test_harness;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<movement::MovementRequest>()
            .add_event::<selection::SelectSector>()
            .add_systems(Startup, world_init::init_warehouse)
            .add_systems(
                Update,
                (movement::process_movements, selection::apply_selection),
            );
    }
}
