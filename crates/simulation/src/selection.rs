//! Selected-sector focus state.
//!
//! Deliberately decoupled from the movement engine: applying a movement
//! never changes which sector is selected. A front end that wants
//! move-also-selects behavior sends a [`SelectSector`] event alongside the
//! movement request.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sectors::{SectorCatalog, SectorId};

/// Resource tracking which sector currently has UI focus.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSector(pub SectorId);

/// Command event: move focus to the given sector.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectSector(pub SectorId);

/// Applies selection events in issue order. Unknown ids are ignored with a
/// warning: selection can originate from stale front-end picking, unlike
/// movement commands.
pub fn apply_selection(
    mut events: EventReader<SelectSector>,
    catalog: Res<SectorCatalog>,
    mut selected: ResMut<SelectedSector>,
) {
    for SelectSector(id) in events.read() {
        if catalog.sector(*id).is_some() {
            selected.0 = *id;
        } else {
            warn!("ignoring selection of unknown sector {}", id);
        }
    }
}
