//! Fill quantizer: maps a continuous (stock, capacity) ratio to the
//! discrete visual fill of a rack — how many tiers read as occupied, and
//! where the tire slots sit within a tier.
//!
//! Pure math, no ECS types. Renderers call [`compute_fill`] whenever a
//! record's stock or capacity changes; nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::config::{SLOT_COLUMN_STRIDE, SLOT_GRID_COLUMNS, SLOT_GRID_ROWS, SLOT_WAVE_AMPLITUDE};

/// One vertical tier of a rack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierFill {
    /// Whether this tier renders as occupied. Uniform per tier: individual
    /// slots are never partially filled.
    pub filled: bool,
    /// Slot positions within the tier as [x, y, z], relative to the tier
    /// center.
    pub slots: Vec<[f32; 3]>,
}

/// Discrete visual fill derived from a continuous stock ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillDescriptor {
    /// Number of tiers rendered as occupied, in `0..=tier_count`.
    pub filled_tiers: usize,
    /// Stock ratio as an integer percentage. Rounded independently of
    /// `filled_tiers`; the two use different rounding granularities.
    pub percent: u32,
    pub tiers: Vec<TierFill>,
}

/// Stock ratio as an integer percentage.
pub fn fill_percent(stock: u32, capacity: u32) -> u32 {
    debug_assert!(capacity > 0, "sector capacity must be positive");
    ((f64::from(stock) / f64::from(capacity)) * 100.0).round() as u32
}

/// Number of tiers rendered as occupied for the given stock ratio, rounded
/// to the nearest tier and clamped to `0..=tier_count`.
pub fn filled_tier_count(stock: u32, capacity: u32, tier_count: usize) -> usize {
    debug_assert!(capacity > 0, "sector capacity must be positive");
    let raw = (f64::from(stock) / f64::from(capacity)) * tier_count as f64;
    (raw.round() as usize).min(tier_count)
}

/// Slot layout within one tier: a row-major grid with a sinusoidal z
/// offset for visual variety. Caps at the slot grid size regardless of
/// `count`. Purely positional — occupancy is decided per tier, not per
/// slot.
pub fn slot_positions(count: usize) -> Vec<[f32; 3]> {
    let capped = count.min(SLOT_GRID_ROWS * SLOT_GRID_COLUMNS);
    let mut slots = Vec::with_capacity(capped);
    for index in 0..capped {
        let row = index / SLOT_GRID_COLUMNS;
        let column = index % SLOT_GRID_COLUMNS;
        let x = column as f32 * SLOT_COLUMN_STRIDE - (SLOT_GRID_COLUMNS as f32 / 2.0 - 0.4);
        let z = ((column + row) as f32).sin() * SLOT_WAVE_AMPLITUDE;
        slots.push([x, 0.0, z]);
    }
    slots
}

/// Map a sector's stock to its full visual fill descriptor.
pub fn compute_fill(
    stock: u32,
    capacity: u32,
    tier_count: usize,
    slots_per_tier: usize,
) -> FillDescriptor {
    let filled_tiers = filled_tier_count(stock, capacity, tier_count);
    let slots = slot_positions(slots_per_tier);
    let tiers = (0..tier_count)
        .map(|tier| TierFill {
            filled: tier < filled_tiers,
            slots: slots.clone(),
        })
        .collect();
    FillDescriptor {
        filled_tiers,
        percent: fill_percent(stock, capacity),
        tiers,
    }
}
