//! Error types for cutting plan computation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Too many openings: {count} supplied, at most {max} allowed")]
    TooManyOpenings { count: usize, max: usize },

    #[error("Invalid dimensions: {}", .errors.join("; "))]
    InvalidDimensions { errors: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
