//! Math types for the glint ray tracer.
//!
//! The tracer works in double precision throughout: the shadow bias used
//! for secondary-ray origins (1e-13) is far below what f32 can represent
//! next to world-scale coordinates.

pub use glam::DVec3 as Vec3;

mod ray;
pub use ray::Ray;
