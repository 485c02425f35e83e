//! # TestWarehouse — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so integration tests can
//! drive the engine through its real event pipeline without a window or
//! renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::activity_log::ActivityLog;
use crate::inventory::{InventoryRecord, InventoryStore, InventorySummary};
use crate::movement::{MovementRequest, MovementType};
use crate::sectors::{Sector, SectorCatalog, SectorId};
use crate::selection::{SelectSector, SelectedSector};

/// A headless Bevy App with the warehouse engine installed and startup
/// seeding already run.
pub struct TestWarehouse {
    app: App,
}

impl TestWarehouse {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(crate::SimulationPlugin);
        // One update so Startup systems execute before any assertion.
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern — consumes and returns Self)
    // -----------------------------------------------------------------------

    /// Override a sector's seeded stock. Test setup only: this bypasses the
    /// movement engine, so no log entry is produced.
    pub fn with_stock(mut self, sector_id: SectorId, stock: u32) -> Self {
        let capacity = self.sector(sector_id).capacity;
        assert!(stock <= capacity, "test stock exceeds sector capacity");
        let mut store = self.app.world_mut().resource_mut::<InventoryStore>();
        store
            .record_mut(sector_id)
            .expect("unknown sector in test setup")
            .stock = stock;
        self
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Send one movement request and run the schedule until it is applied.
    pub fn apply(&mut self, movement: MovementType, amount: i32, sector_id: SectorId) {
        self.app.world_mut().send_event(MovementRequest {
            movement,
            amount,
            sector_id,
        });
        self.app.update();
    }

    /// Send one selection event and run the schedule.
    pub fn select(&mut self, sector_id: SectorId) {
        self.app.world_mut().send_event(SelectSector(sector_id));
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    pub fn catalog(&self) -> SectorCatalog {
        self.app.world().resource::<SectorCatalog>().clone()
    }

    pub fn sector(&self, sector_id: SectorId) -> Sector {
        self.app
            .world()
            .resource::<SectorCatalog>()
            .sector(sector_id)
            .expect("unknown sector in test")
            .clone()
    }

    pub fn store(&self) -> InventoryStore {
        self.app.world().resource::<InventoryStore>().clone()
    }

    pub fn record(&self, sector_id: SectorId) -> InventoryRecord {
        self.app
            .world()
            .resource::<InventoryStore>()
            .record(sector_id)
            .expect("unknown sector in test")
            .clone()
    }

    pub fn stock(&self, sector_id: SectorId) -> u32 {
        self.record(sector_id).stock
    }

    pub fn log(&self) -> Vec<String> {
        self.app.world().resource::<ActivityLog>().entries.clone()
    }

    pub fn log_head(&self) -> Option<String> {
        self.app
            .world()
            .resource::<ActivityLog>()
            .head()
            .map(str::to_string)
    }

    pub fn selected(&self) -> SectorId {
        self.app.world().resource::<SelectedSector>().0
    }

    pub fn summary(&self) -> InventorySummary {
        let world = self.app.world();
        InventorySummary::compute(
            world.resource::<InventoryStore>(),
            world.resource::<SectorCatalog>(),
        )
    }
}
