//! Bounded, most-recent-first history of applied movements.
//!
//! Display only: the movement engine writes to it but never reads it back
//! for correctness decisions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ACTIVITY_LOG_CAP;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Entries ordered newest first.
    pub entries: Vec<String>,
    pub max_entries: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: ACTIVITY_LOG_CAP,
        }
    }
}

impl ActivityLog {
    /// Prepend an entry, evicting the oldest once over capacity.
    pub fn push(&mut self, entry: String) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_entries);
    }

    /// Most recent entry, if any.
    pub fn head(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }
}
