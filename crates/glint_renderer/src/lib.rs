//! Glint Renderer - Whitted-style CPU ray tracing.
//!
//! Casts one primary ray per pixel, finds the nearest surface hit and
//! recursively evaluates light transport: direct illumination with
//! shadowing, mirror reflection, and dielectric refraction with
//! Fresnel-weighted blending.

mod camera;
mod error;
mod framebuffer;
mod intersection;
mod renderer;
mod shading;

pub use camera::Camera;
pub use error::{RenderError, ShadingError};
pub use framebuffer::{color_to_rgba, Framebuffer};
pub use intersection::{closest_intersection, Intersection};
pub use renderer::{render, RenderConfig};
pub use shading::{fresnel, shade, MAX_RECURSION_DEPTH, SHADOW_BIAS};

/// Re-export the math and scene types used throughout the public API
pub use glint_core::{Color, Material, Scene};
pub use glint_math::{Ray, Vec3};
