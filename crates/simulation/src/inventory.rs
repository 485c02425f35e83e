//! Inventory store: one mutable stock record per sector, plus derived
//! warehouse-wide aggregates.
//!
//! Aggregates are recomputed from the records on every read. There is no
//! incrementally maintained running total that could drift from the source
//! of truth.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{SEED_FREQUENCY, SEED_PHASE, SEED_RATIO_MAX, SEED_RATIO_MIN, SEED_RATIO_SPAN};
use crate::sectors::{Sector, SectorCatalog, SectorId};

/// `last_movement` marker used before any movement touches a record.
pub const INITIAL_PLACEMENT: &str = "Initial placement complete";

/// Current stock held in one sector. `stock` stays within `0..=capacity`
/// of the owning sector at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub sector_id: SectorId,
    pub stock: u32,
    /// Human-readable description of the most recent movement applied.
    pub last_movement: String,
}

/// Resource holding one record per sector, in catalog order.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryStore {
    pub records: Vec<InventoryRecord>,
}

/// Reproducible starting stock ratio for a sector: a sinusoidal hash of the
/// sector id, scaled into [SEED_RATIO_MIN, SEED_RATIO_MAX]. Looks scattered
/// across sectors but is identical on every run.
fn seed_ratio(id: SectorId) -> f64 {
    let ratio =
        SEED_RATIO_MIN + (f64::from(id.0) * SEED_FREQUENCY + SEED_PHASE).sin().abs() * SEED_RATIO_SPAN;
    ratio.clamp(SEED_RATIO_MIN, SEED_RATIO_MAX)
}

/// Starting stock for one sector.
pub fn initial_stock(sector: &Sector) -> u32 {
    (f64::from(sector.capacity) * seed_ratio(sector.id)).floor() as u32
}

impl InventoryStore {
    /// Build a store with one seeded record per catalog sector.
    pub fn seeded(catalog: &SectorCatalog) -> Self {
        Self {
            records: catalog
                .sectors
                .iter()
                .map(|sector| InventoryRecord {
                    sector_id: sector.id,
                    stock: initial_stock(sector),
                    last_movement: INITIAL_PLACEMENT.to_string(),
                })
                .collect(),
        }
    }

    #[inline]
    pub fn record(&self, sector_id: SectorId) -> Option<&InventoryRecord> {
        self.records.iter().find(|record| record.sector_id == sector_id)
    }

    #[inline]
    pub fn record_mut(&mut self, sector_id: SectorId) -> Option<&mut InventoryRecord> {
        self.records.iter_mut().find(|record| record.sector_id == sector_id)
    }

    /// Sum of stock across all records.
    pub fn total_stock(&self) -> u32 {
        self.records.iter().map(|record| record.stock).sum()
    }

    /// Warehouse-wide utilization as an integer percentage of total capacity.
    pub fn utilization(&self, catalog: &SectorCatalog) -> u32 {
        let total_capacity = catalog.total_capacity();
        if total_capacity == 0 {
            return 0;
        }
        ((f64::from(self.total_stock()) / f64::from(total_capacity)) * 100.0).round() as u32
    }
}

/// Warehouse-wide aggregates, derived from the current records on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_stock: u32,
    pub total_capacity: u32,
    /// round(total_stock / total_capacity * 100)
    pub utilization: u32,
}

impl InventorySummary {
    pub fn compute(store: &InventoryStore, catalog: &SectorCatalog) -> Self {
        Self {
            total_stock: store.total_stock(),
            total_capacity: catalog.total_capacity(),
            utilization: store.utilization(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_reproducible() {
        let catalog = SectorCatalog::default();
        assert_eq!(InventoryStore::seeded(&catalog), InventoryStore::seeded(&catalog));
    }

    #[test]
    fn seeded_stock_is_a_bounded_fraction_of_capacity() {
        let catalog = SectorCatalog::default();
        let store = InventoryStore::seeded(&catalog);
        assert_eq!(store.records.len(), catalog.len());
        for record in &store.records {
            let capacity = catalog.sector(record.sector_id).unwrap().capacity;
            let lower = (f64::from(capacity) * SEED_RATIO_MIN).floor() as u32;
            let upper = (f64::from(capacity) * SEED_RATIO_MAX).floor() as u32;
            assert!(
                record.stock >= lower && record.stock <= upper,
                "sector {} seeded outside [{}..{}]: {}",
                record.sector_id,
                lower,
                upper,
                record.stock
            );
            assert_eq!(record.last_movement, INITIAL_PLACEMENT);
        }
    }

    #[test]
    fn total_stock_matches_manual_sum() {
        let catalog = SectorCatalog::default();
        let store = InventoryStore::seeded(&catalog);
        let manual: u32 = store.records.iter().map(|record| record.stock).sum();
        assert_eq!(store.total_stock(), manual);
    }

    #[test]
    fn utilization_matches_rounded_ratio() {
        let catalog = SectorCatalog::default();
        let mut store = InventoryStore::seeded(&catalog);
        // Fill every sector halfway (integer floor) and check the formula.
        for record in &mut store.records {
            record.stock = catalog.sector(record.sector_id).unwrap().capacity / 2;
        }
        let expected = ((f64::from(store.total_stock())
            / f64::from(catalog.total_capacity()))
            * 100.0)
            .round() as u32;
        assert_eq!(store.utilization(&catalog), expected);
    }

    #[test]
    fn aggregates_are_idempotent_between_movements() {
        let catalog = SectorCatalog::default();
        let store = InventoryStore::seeded(&catalog);
        let first = InventorySummary::compute(&store, &catalog);
        let second = InventorySummary::compute(&store, &catalog);
        assert_eq!(first, second);
        assert_eq!(first.total_stock, store.total_stock());
        assert_eq!(first.total_capacity, catalog.total_capacity());
    }

    #[test]
    fn record_lookup_by_sector_id() {
        let catalog = SectorCatalog::default();
        let mut store = InventoryStore::seeded(&catalog);
        assert!(store.record(SectorId(5)).is_some());
        assert!(store.record(SectorId(99)).is_none());
        store.record_mut(SectorId(5)).unwrap().stock = 42;
        assert_eq!(store.record(SectorId(5)).unwrap().stock, 42);
    }
}
