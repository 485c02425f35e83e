//! Engine-wide constants: warehouse floor layout, rack geometry, and
//! simulation tuning values.

/// Number of storage sectors on the warehouse floor.
pub const SECTOR_COUNT: usize = 12;
/// Sectors per row in the floor grid.
pub const GRID_COLUMNS: usize = 4;
/// Id of the first sector; ids are contiguous from here.
pub const FIRST_SECTOR_ID: u32 = 5;

/// World-space spacing between sector columns.
pub const COLUMN_STRIDE: f32 = 5.0;
/// World-space spacing between sector rows.
pub const ROW_STRIDE: f32 = 4.0;
/// Offsets that keep the sector grid centered on the world origin.
pub const COLUMN_CENTERING_OFFSET: f32 = 7.5;
pub const ROW_CENTERING_OFFSET: f32 = 4.0;

/// Vertical tiers per storage rack.
pub const RACK_TIERS: usize = 4;
/// Tire slots rendered per tier.
pub const SLOTS_PER_TIER: usize = 6;
/// Slot grid inside a single tier (row-major).
pub const SLOT_GRID_ROWS: usize = 3;
pub const SLOT_GRID_COLUMNS: usize = 4;
/// World-space spacing between slot columns within a tier.
pub const SLOT_COLUMN_STRIDE: f32 = 0.9;
/// Amplitude of the sinusoidal z-offset applied to slot positions.
pub const SLOT_WAVE_AMPLITUDE: f32 = 0.4;

/// Maximum number of entries retained in the activity log.
pub const ACTIVITY_LOG_CAP: usize = 6;

/// Initial stock seeding curve:
/// ratio = MIN + |sin(id * FREQUENCY + PHASE)| * SPAN, clamped to [MIN, MAX].
/// PHASE is 3.14 by definition of the curve, not an approximation of PI.
pub const SEED_RATIO_MIN: f64 = 0.35;
pub const SEED_RATIO_MAX: f64 = 0.70;
pub const SEED_RATIO_SPAN: f64 = 0.35;
pub const SEED_FREQUENCY: f64 = 12.7;
pub const SEED_PHASE: f64 = 3.14;
