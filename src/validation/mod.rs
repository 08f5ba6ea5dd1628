//! Input validation for cutting plan computation.

mod validate;

pub use validate::{ensure_valid, validate_opening, validate_openings, ValidationResult};
