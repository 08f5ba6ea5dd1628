//! Opening expander: turns opening specs into the flat list of cuts.

use crate::model::{OpeningSpec, PieceRole, RequiredPiece};

/// Expand opening specs into the required cut pieces.
///
/// Pure function; one pass over the input. Opening order is preserved
/// and within an opening the role order is fixed: left height, right
/// height, bottom width, then top width when present.
pub fn expand_openings(openings: &[OpeningSpec]) -> Vec<RequiredPiece> {
    let mut pieces = Vec::with_capacity(openings.len() * 4);

    for opening in openings {
        pieces.push(RequiredPiece::new(
            PieceRole::HeightLeft,
            opening.index,
            opening.height_left,
        ));
        pieces.push(RequiredPiece::new(
            PieceRole::HeightRight,
            opening.index,
            opening.height_right,
        ));
        pieces.push(RequiredPiece::new(
            PieceRole::WidthBottom,
            opening.index,
            opening.width_bottom,
        ));
        if let Some(width_top) = opening.width_top {
            pieces.push(RequiredPiece::new(
                PieceRole::WidthTop,
                opening.index,
                width_top,
            ));
        }
    }

    tracing::debug!(
        openings = openings.len(),
        pieces = pieces.len(),
        "expanded openings into required pieces"
    );

    pieces
}
