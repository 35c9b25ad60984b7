//! Scene construction errors.

use thiserror::Error;

/// Errors raised while validating a scene at construction time.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("invalid image dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid field of view {0} degrees: must be strictly between 0 and 180")]
    InvalidFov(f64),

    #[error("invalid material: {0}")]
    InvalidMaterial(String),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
