//! Sector catalog: the fixed set of storage sectors and their placement in
//! the warehouse floor grid.
//!
//! Sectors are generated once at startup and never change afterwards. Every
//! other part of the engine treats the catalog as read-only reference data.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    COLUMN_CENTERING_OFFSET, COLUMN_STRIDE, FIRST_SECTOR_ID, GRID_COLUMNS, ROW_CENTERING_OFFSET,
    ROW_STRIDE, SECTOR_COUNT,
};

/// Identifier of a physical storage sector. Unique and stable for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(pub u32);

impl std::fmt::Display for SectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A storage sector: finite capacity plus a slot in the floor grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    /// Display name, derived from the id.
    pub label: String,
    /// Maximum stock units the sector can hold. Always positive.
    pub capacity: u32,
    /// World-space position of the rack base as [x, y, z]; y is always 0.
    pub position: [f32; 3],
    /// Display accent (hex color), cycled from the sector palette.
    pub color: String,
}

/// Per-sector capacity, cycled by sector index so the floor is not
/// visually uniform.
const SECTOR_CAPACITIES: [u32; 12] = [
    180, 190, 200, 210, 200, 210, 220, 200, 190, 205, 215, 230,
];

/// Display accents, cycled by sector index.
const SECTOR_PALETTE: [&str; 12] = [
    "#feb47b", "#ff7e5f", "#ffd166", "#8dd7ff", "#64c7ff", "#9d7cff", "#ec9f05", "#38c1b9",
    "#52b69a", "#4facfe", "#4d9dff", "#f37735",
];

/// Generate `count` sectors laid out row-major with `columns` sectors per
/// row. Deterministic: the same inputs always yield the same ids,
/// capacities, positions, and colors.
///
/// `count` and `columns` must be positive.
pub fn generate_sectors(count: usize, columns: usize) -> Vec<Sector> {
    assert!(count > 0, "sector count must be positive");
    assert!(columns > 0, "grid column count must be positive");

    (0..count)
        .map(|index| {
            let id = SectorId(FIRST_SECTOR_ID + index as u32);
            let row = index / columns;
            let column = index % columns;
            Sector {
                id,
                label: format!("Sector {}", id),
                capacity: SECTOR_CAPACITIES[index % SECTOR_CAPACITIES.len()],
                position: [
                    column as f32 * COLUMN_STRIDE - COLUMN_CENTERING_OFFSET,
                    0.0,
                    row as f32 * ROW_STRIDE - ROW_CENTERING_OFFSET,
                ],
                color: SECTOR_PALETTE[index % SECTOR_PALETTE.len()].to_string(),
            }
        })
        .collect()
}

/// Resource holding the generated sector catalog, in generation order.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorCatalog {
    pub sectors: Vec<Sector>,
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self {
            sectors: generate_sectors(SECTOR_COUNT, GRID_COLUMNS),
        }
    }
}

impl SectorCatalog {
    /// Look up a sector by id.
    #[inline]
    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|sector| sector.id == id)
    }

    /// Sum of all sector capacities.
    pub fn total_capacity(&self) -> u32 {
        self.sectors.iter().map(|sector| sector.capacity).sum()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
