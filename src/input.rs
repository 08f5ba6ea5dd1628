//! Loading opening lists from JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::model::OpeningSpec;

/// One opening as written in an input file, before index assignment.
///
/// `height_right` and `width_top` are overrides; leaving them out means
/// "same as the left height" and "no separate top piece" respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningRecord {
    /// Left height in centimeters.
    pub height_left: u32,
    /// Right height override in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_right: Option<u32>,
    /// Bottom width in centimeters.
    pub width_bottom: u32,
    /// Top width override in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_top: Option<u32>,
}

/// Convert raw records into opening specs with 1-based indices.
pub fn openings_from_records(records: &[OpeningRecord]) -> Vec<OpeningSpec> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            OpeningSpec::new(
                i + 1,
                record.height_left,
                record.height_right,
                record.width_bottom,
                record.width_top,
            )
        })
        .collect()
}

/// Load an opening list from a JSON file.
pub fn load_openings(path: &Path) -> Result<Vec<OpeningSpec>> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let records: Vec<OpeningRecord> =
        serde_json::from_str(&content).map_err(|e| PlanError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), openings = records.len(), "loaded openings");

    Ok(openings_from_records(&records))
}
