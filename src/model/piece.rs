//! Required piece definition: one cut of a specific length and role.

use serde::{Deserialize, Serialize};

/// Which side of an opening a piece is cut for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceRole {
    /// Left vertical profile.
    HeightLeft,
    /// Right vertical profile.
    HeightRight,
    /// Bottom horizontal profile.
    WidthBottom,
    /// Top horizontal profile (only for openings with a top override).
    WidthTop,
}

impl std::fmt::Display for PieceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceRole::HeightLeft => write!(f, "Left height"),
            PieceRole::HeightRight => write!(f, "Right height"),
            PieceRole::WidthBottom => write!(f, "Bottom width"),
            PieceRole::WidthTop => write!(f, "Top width"),
        }
    }
}

/// One cut to produce, destined for exactly one bar.
///
/// Created by the expander and never mutated afterwards. `opening` is a
/// back-reference to the 1-based index of the source opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredPiece {
    /// Which side of the opening this piece covers.
    pub role: PieceRole,
    /// 1-based index of the source opening.
    pub opening: usize,
    /// Cut length in centimeters.
    pub length: u32,
}

impl RequiredPiece {
    /// Create a new required piece.
    pub fn new(role: PieceRole, opening: usize, length: u32) -> Self {
        Self {
            role,
            opening,
            length,
        }
    }
}

impl std::fmt::Display for RequiredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} opening {} ({} cm)", self.role, self.opening, self.length)
    }
}
