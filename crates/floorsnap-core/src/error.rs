//! Error types for configuration and scene editing.
//!
//! Snapping itself never fails: a shape that cannot be queried simply yields
//! no guides.

use crate::shapes::ShapeId;
use thiserror::Error;

/// Invalid snapping configuration.
#[derive(Debug, Error, PartialEq)]
pub enum SnapError {
    #[error("Snap threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),
    #[error("Guide extent must be a positive finite number, got {0}")]
    InvalidExtent(f64),
    #[error("Anchor inset must be a non-negative finite number, got {0}")]
    InvalidInset(f64),
    #[error("Config parse error: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type SnapResult<T> = Result<T, SnapError>;

/// Scene editing errors.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),
    #[error("Shape {0} is not a wall")]
    NotAWall(ShapeId),
    #[error("Line too short: {length} < {min}")]
    LineTooShort { length: f64, min: f64 },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
