//! cutplan-rs - Cutting plan computation for window and door profiles.
//!
//! This library turns a list of rectangular opening measurements into a
//! cutting plan for fixed-length stock bars: each opening expands into
//! its required cut pieces, and a First-Fit-Decreasing packer assigns
//! the pieces to as few bars as the heuristic manages, reporting waste
//! and utilization.
//!
//! # Example
//!
//! ```
//! use cutplan_rs::{compute_plan, OpeningSpec, PlannerConfig};
//!
//! let openings = vec![OpeningSpec::new(1, 150, None, 150, None)];
//! let plan = compute_plan(&openings, &PlannerConfig::default()).unwrap();
//! assert_eq!(plan.bar_count(), 1);
//! assert_eq!(plan.total_waste(), 150);
//! ```

pub mod config;
pub mod error;
pub mod expand;
pub mod input;
pub mod model;
pub mod packing;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{PlannerConfig, DEFAULT_BAR_LENGTH_CM};
pub use error::{PlanError, Result};
pub use expand::expand_openings;
pub use input::{load_openings, OpeningRecord};
pub use model::{Bar, CuttingPlan, OpeningSpec, PieceRole, RequiredPiece};
pub use packing::pack_pieces;
pub use report::render_plan;
pub use validation::{validate_openings, ValidationResult};

/// Compute a cutting plan from validated opening specs.
///
/// This is the main high-level function performing the full pipeline:
/// 1. Validate the openings, batch-rejecting any out-of-range
///    dimension before packing starts
/// 2. Expand openings into required pieces
/// 3. Pack the pieces onto bars with First-Fit-Decreasing
///
/// Zero openings yields an empty plan rather than an error.
pub fn compute_plan(openings: &[OpeningSpec], config: &PlannerConfig) -> Result<CuttingPlan> {
    validation::ensure_valid(openings, config)?;

    let pieces = expand_openings(openings);
    pack_pieces(&pieces, config.bar_length)
}

/// Compute a cutting plan from a JSON opening list on disk.
pub fn plan_from_file(path: &std::path::Path, config: &PlannerConfig) -> Result<CuttingPlan> {
    let openings = load_openings(path)?;
    compute_plan(&openings, config)
}
