//! Glint Core - Scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: the `Material` variants a surface can carry
//! - **Capability traits**: `Surface` and `Light`, plus the built-in
//!   `Sphere`, `Plane`, `DirectionalLight` and `PointLight`
//! - **Scene aggregate**: `Scene` and its validating builder
//! - **Scene descriptions**: serde types for JSON scene files

pub mod config;
pub mod error;
pub mod light;
pub mod material;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use config::{LightConfig, SceneConfig, SurfaceConfig};
pub use error::SceneError;
pub use light::{DirectionalLight, Light, PointLight};
pub use material::{Color, Material};
pub use scene::{Scene, SceneBuilder};
pub use surface::{Plane, Sphere, Surface};
