//! Opening definition representing one rectangular window or door gap.

use serde::{Deserialize, Serialize};

/// One rectangular opening whose frame requires cut profile pieces.
///
/// The right height defaults to the left height and the top width is
/// optional; both reflect how measurements are taken on site, where the
/// two sides usually share one measurement and a separate top width only
/// exists for out-of-square openings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningSpec {
    /// 1-based position of this opening in the input.
    pub index: usize,
    /// Left height in centimeters.
    pub height_left: u32,
    /// Right height in centimeters (resolved; equals `height_left`
    /// unless an override was supplied).
    pub height_right: u32,
    /// Bottom width in centimeters.
    pub width_bottom: u32,
    /// Top width in centimeters, if it differs from the bottom width.
    pub width_top: Option<u32>,
}

impl OpeningSpec {
    /// Create a new opening spec.
    ///
    /// `height_right` is an optional override; when absent the left
    /// height is duplicated into both side pieces.
    pub fn new(
        index: usize,
        height_left: u32,
        height_right: Option<u32>,
        width_bottom: u32,
        width_top: Option<u32>,
    ) -> Self {
        Self {
            index,
            height_left,
            height_right: height_right.unwrap_or(height_left),
            width_bottom,
            width_top,
        }
    }

    /// Whether a separate top width piece is required.
    pub fn has_top_width(&self) -> bool {
        self.width_top.is_some()
    }

    /// Number of cut pieces this opening requires.
    pub fn piece_count(&self) -> usize {
        if self.has_top_width() {
            4
        } else {
            3
        }
    }
}
