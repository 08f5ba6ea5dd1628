//! First-Fit-Decreasing packer.
//!
//! Pieces are sorted largest-first and each is placed into the earliest
//! created bar with enough remaining length; a new bar is opened only
//! when none fits. Heuristic: the plan is not guaranteed to use the
//! minimum possible number of bars.

use crate::error::{PlanError, Result};
use crate::model::{Bar, CuttingPlan, RequiredPiece};

/// Pack pieces onto bars of the given length.
///
/// Rejects the whole computation if any piece has zero length or exceeds
/// the bar length, naming every offending piece; such a piece could
/// never be placed and must not be silently dropped. An empty piece list
/// yields an empty plan.
///
/// Deterministic: equal-length pieces keep their input order (stable
/// sort), and the first-fit scan always prefers the earliest bar, so the
/// same input produces the identical plan.
pub fn pack_pieces(pieces: &[RequiredPiece], bar_length: u32) -> Result<CuttingPlan> {
    let unplaceable: Vec<String> = pieces
        .iter()
        .filter(|p| p.length == 0 || p.length > bar_length)
        .map(|p| {
            format!(
                "{} opening {}: {} cm cannot be cut from a {} cm bar",
                p.role, p.opening, p.length, bar_length
            )
        })
        .collect();
    if !unplaceable.is_empty() {
        return Err(PlanError::InvalidDimensions {
            errors: unplaceable,
        });
    }

    let mut sorted: Vec<RequiredPiece> = pieces.to_vec();
    sorted.sort_by(|a, b| b.length.cmp(&a.length));

    let mut bars: Vec<Bar> = Vec::new();
    for piece in sorted {
        match bars.iter_mut().find(|bar| bar.waste() >= piece.length) {
            Some(bar) => bar.push(piece),
            None => {
                let mut bar = Bar::new(bars.len() + 1, bar_length);
                bar.push(piece);
                bars.push(bar);
            }
        }
    }

    tracing::debug!(
        pieces = pieces.len(),
        bars = bars.len(),
        bar_length,
        "packed pieces onto bars"
    );

    Ok(CuttingPlan { bars, bar_length })
}
