//! Movement engine: applies inbound/outbound stock adjustments to the
//! inventory store.
//!
//! Two deliberate policies:
//! - a non-positive amount is absorbed as a no-op, not rejected;
//! - boundary-violating amounts saturate at 0 / capacity instead of
//!   failing. The returned [`MovementOutcome`] still reports how much of
//!   the request was applied, so callers that care can tell a truncated
//!   movement from a full one.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::activity_log::ActivityLog;
use crate::inventory::{InventoryRecord, InventoryStore};
use crate::sectors::{Sector, SectorCatalog, SectorId};

/// Direction of a stock movement. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    Inbound,
    Outbound,
}

impl MovementType {
    /// Display label used in movement descriptions and log lines.
    pub fn label(self) -> &'static str {
        match self {
            MovementType::Inbound => "Inbound",
            MovementType::Outbound => "Outbound",
        }
    }
}

/// Command event: request a stock adjustment against one sector.
///
/// `amount` is signed so a non-positive request is expressible; the engine
/// absorbs those as no-ops.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRequest {
    pub movement: MovementType,
    pub amount: i32,
    pub sector_id: SectorId,
}

/// What a movement actually did. `applied < requested` means the update
/// saturated at a stock boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementOutcome {
    pub requested: u32,
    pub applied: u32,
    pub new_stock: u32,
    pub saturated: bool,
}

/// Apply one movement to a record.
///
/// Returns `None` for a non-positive `amount` (no state change, no log
/// entry). Otherwise the stock saturates at `0` and `sector.capacity`,
/// the record's `last_movement` is rewritten, and one line is pushed to
/// the activity log.
pub fn apply_movement(
    movement: MovementType,
    amount: i32,
    sector: &Sector,
    record: &mut InventoryRecord,
    log: &mut ActivityLog,
) -> Option<MovementOutcome> {
    if amount <= 0 {
        return None;
    }
    debug_assert_eq!(record.sector_id, sector.id, "record does not belong to this sector");

    let requested = amount as u32;
    let previous = record.stock;
    let new_stock = match movement {
        MovementType::Inbound => previous.saturating_add(requested).min(sector.capacity),
        MovementType::Outbound => previous.saturating_sub(requested),
    };
    let applied = previous.abs_diff(new_stock);

    record.stock = new_stock;
    record.last_movement = format!("{} {} · {}", movement.label(), requested, sector.label);
    log.push(format!(
        "{} {} → {} ({}/{})",
        movement.label(),
        requested,
        sector.label,
        new_stock,
        sector.capacity
    ));

    Some(MovementOutcome {
        requested,
        applied,
        new_stock,
        saturated: applied != requested,
    })
}

/// Drains pending movement requests in issue order. This system is the
/// sole writer of the inventory store and activity log.
pub fn process_movements(
    mut requests: EventReader<MovementRequest>,
    catalog: Res<SectorCatalog>,
    mut inventory: ResMut<InventoryStore>,
    mut log: ResMut<ActivityLog>,
) {
    for request in requests.read() {
        // Sector ids come from the fixed catalog; a miss is a caller bug.
        let sector = catalog
            .sector(request.sector_id)
            .expect("movement request references a sector missing from the catalog");
        let record = inventory
            .record_mut(request.sector_id)
            .expect("inventory record missing for catalog sector");
        apply_movement(request.movement, request.amount, sector, record, &mut log);
    }
}
