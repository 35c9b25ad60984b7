//! Renderer errors.

use thiserror::Error;

/// Errors raised while shading a single pixel.
#[derive(Error, Debug)]
pub enum ShadingError {
    /// A surface reported a material kind this engine does not recognize.
    /// Fatal for the affected pixels rather than silently shaded black.
    #[error("surface reported an unrecognized material kind: {0}")]
    UnknownMaterial(String),
}

/// Errors raised by a full render pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to build render worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// One or more pixels failed to shade. The render ran to completion
    /// (failed pixels keep the background color) and the first error is
    /// carried here so the failure is surfaced, not masked.
    #[error("{failed} pixel(s) failed to shade; first error: {first}")]
    Shading { failed: usize, first: ShadingError },
}
