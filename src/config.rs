//! Configuration constants and settings for the planner.

/// Standard stock bar length in centimeters (6 m).
pub const DEFAULT_BAR_LENGTH_CM: u32 = 600;

/// Maximum number of openings accepted per computation.
pub const MAX_OPENINGS: usize = 50;

/// Minimum accepted dimension in centimeters.
pub const MIN_DIMENSION_CM: u32 = 1;

/// Planner configuration.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Stock bar length in centimeters.
    pub bar_length: u32,
    /// Maximum number of openings per computation.
    pub max_openings: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            bar_length: DEFAULT_BAR_LENGTH_CM,
            max_openings: MAX_OPENINGS,
        }
    }
}

impl PlannerConfig {
    /// Create a configuration for a given bar length.
    pub fn new(bar_length: u32) -> Self {
        Self {
            bar_length,
            ..Default::default()
        }
    }

    /// Largest dimension a single opening side may have.
    ///
    /// A side longer than one bar cannot be cut from one bar, so the
    /// bound equals the bar length.
    pub fn max_dimension(&self) -> u32 {
        self.bar_length
    }
}
