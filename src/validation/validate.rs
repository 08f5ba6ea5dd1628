//! Validation logic for opening specifications.
//!
//! All offending dimensions are reported in one batch so a caller can
//! fix every input in a single pass. Warnings never fail validation.

use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::model::OpeningSpec;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate all openings against the planner configuration.
///
/// Zero openings is accepted (the plan will simply be empty); more than
/// `config.max_openings` is structurally unusable and returns an error
/// immediately.
pub fn validate_openings(
    openings: &[OpeningSpec],
    config: &PlannerConfig,
) -> Result<ValidationResult> {
    if openings.len() > config.max_openings {
        return Err(PlanError::TooManyOpenings {
            count: openings.len(),
            max: config.max_openings,
        });
    }

    let mut result = ValidationResult::ok();

    if openings.is_empty() {
        result.add_warning("no openings supplied; the plan will be empty");
    }

    for opening in openings {
        result.merge(validate_opening(opening, config));
    }

    Ok(result)
}

/// Validate a single opening.
pub fn validate_opening(opening: &OpeningSpec, config: &PlannerConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let max = config.max_dimension();

    let mut check = |name: &str, value: u32| {
        if value == 0 || value > max {
            result.add_error(format!(
                "opening {}: {} = {} cm (allowed 1-{})",
                opening.index, name, value, max
            ));
        }
    };

    check("left height", opening.height_left);
    check("right height", opening.height_right);
    check("bottom width", opening.width_bottom);
    if let Some(width_top) = opening.width_top {
        check("top width", width_top);
    }

    if opening.width_top == Some(opening.width_bottom) {
        result.add_warning(format!(
            "opening {}: top width equals bottom width; the override has no effect",
            opening.index
        ));
    }

    result
}

/// Validate and reject invalid input with a single batched error.
pub fn ensure_valid(openings: &[OpeningSpec], config: &PlannerConfig) -> Result<()> {
    let result = validate_openings(openings, config)?;

    if !result.passed {
        return Err(PlanError::InvalidDimensions {
            errors: result.errors,
        });
    }

    Ok(())
}
