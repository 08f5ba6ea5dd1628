//! Cutting plan: the full packing result plus derived metrics.

use serde::{Deserialize, Serialize};

use super::Bar;

/// The full result of a packing run.
///
/// Bars are kept in creation order. Every piece handed to the packer
/// appears in exactly one bar; the metrics below are derived on demand
/// and carry no independent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuttingPlan {
    /// Bars in creation order.
    pub bars: Vec<Bar>,
    /// Bar length the plan was computed against, in centimeters.
    pub bar_length: u32,
}

impl CuttingPlan {
    /// Create an empty plan for a given bar length.
    pub fn empty(bar_length: u32) -> Self {
        Self {
            bars: Vec::new(),
            bar_length,
        }
    }

    /// Number of bars consumed.
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Total number of pieces across all bars.
    pub fn piece_count(&self) -> usize {
        self.bars.iter().map(|b| b.pieces.len()).sum()
    }

    /// Total assigned length across all bars.
    pub fn total_used(&self) -> u32 {
        self.bars.iter().map(|b| b.used_length()).sum()
    }

    /// Total unused length across all bars.
    pub fn total_waste(&self) -> u32 {
        self.bars.iter().map(|b| b.waste()).sum()
    }

    /// Material utilization as a percentage of consumed bar length.
    ///
    /// 0.0 for an empty plan.
    pub fn utilization_percent(&self) -> f64 {
        if self.bars.is_empty() {
            return 0.0;
        }
        let consumed = (self.bar_count() as u64) * u64::from(self.bar_length);
        100.0 * (u64::from(self.total_used()) as f64) / (consumed as f64)
    }
}
