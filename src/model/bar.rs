//! Stock bar holding the pieces assigned to it by the packer.

use serde::{Deserialize, Serialize};

use super::RequiredPiece;

/// One stock bar consumed by the plan.
///
/// Pieces appear in assignment order. Invariant: the assigned lengths
/// never exceed `capacity`; `push` asserts it because a violation means
/// the packer mis-tracked remaining space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// 1-based sequence number, in bar creation order.
    pub number: usize,
    /// Pieces assigned to this bar, in assignment order.
    pub pieces: Vec<RequiredPiece>,
    /// Bar capacity in centimeters.
    pub capacity: u32,
}

impl Bar {
    /// Create an empty bar.
    pub fn new(number: usize, capacity: u32) -> Self {
        Self {
            number,
            pieces: Vec::new(),
            capacity,
        }
    }

    /// Sum of the assigned piece lengths.
    pub fn used_length(&self) -> u32 {
        self.pieces.iter().map(|p| p.length).sum()
    }

    /// Unused length remaining on this bar.
    pub fn waste(&self) -> u32 {
        self.capacity - self.used_length()
    }

    /// Assign a piece to this bar.
    ///
    /// # Panics
    ///
    /// Panics if the piece does not fit in the remaining length.
    pub fn push(&mut self, piece: RequiredPiece) {
        assert!(
            piece.length <= self.waste(),
            "piece of {} cm does not fit bar #{} with {} cm remaining",
            piece.length,
            self.number,
            self.waste()
        );
        self.pieces.push(piece);
    }
}
