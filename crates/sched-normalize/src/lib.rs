pub mod coerce;
pub mod entities;
pub mod rel_type;
pub mod snapshot;

pub use entities::{normalize_relationships, normalize_tasks, normalize_wbs};
pub use rel_type::canonical_rel_type;
pub use snapshot::{CompareInput, ComparePair, normalize_compare, normalize_snapshot};

/// Hour-to-day conversion factor applied when a task only carries an
/// hour-count duration field.
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Options shared by one normalization run.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub hours_per_day: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}
