//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u32,

    /// Leaves evaluated statically.
    pub leaves: u32,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u32,

    /// Deepest ply reached.
    pub max_depth: u32,

    /// Wall time of the search (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
