//! Light trait and built-in light kinds.

use std::f64::consts::PI;

use glint_math::Vec3;

use crate::material::Color;

/// A light source the shading engine can sample.
///
/// `direction_from` is not guaranteed to return a unit vector; callers
/// must normalize before using it in dot products.
pub trait Light: Send + Sync {
    /// Direction from the given point toward the light.
    fn direction_from(&self, point: Vec3) -> Vec3;

    /// Distance from the given point to the light.
    fn distance_from(&self, point: Vec3) -> f64;

    /// Light intensity arriving at the given point.
    fn intensity_at(&self, point: Vec3) -> f64;

    /// Base color of the light.
    fn color(&self) -> Color;
}

/// A light infinitely far away, arriving from a single direction.
pub struct DirectionalLight {
    /// Direction the light travels, unit length
    direction: Vec3,
    color: Color,
    intensity: f64,
}

impl DirectionalLight {
    /// Create a directional light traveling along `direction`.
    pub fn new(direction: Vec3, color: Color, intensity: f64) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            intensity,
        }
    }
}

impl Light for DirectionalLight {
    fn direction_from(&self, _point: Vec3) -> Vec3 {
        -self.direction
    }

    fn distance_from(&self, _point: Vec3) -> f64 {
        f64::INFINITY
    }

    fn intensity_at(&self, _point: Vec3) -> f64 {
        self.intensity
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// A point light with inverse-square falloff.
pub struct PointLight {
    position: Vec3,
    color: Color,
    intensity: f64,
}

impl PointLight {
    /// Create a point light at `position` with total emitted `intensity`.
    pub fn new(position: Vec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

impl Light for PointLight {
    fn direction_from(&self, point: Vec3) -> Vec3 {
        self.position - point
    }

    fn distance_from(&self, point: Vec3) -> f64 {
        (self.position - point).length()
    }

    fn intensity_at(&self, point: Vec3) -> f64 {
        let r2 = (self.position - point).length_squared();
        self.intensity / (4.0 * PI * r2)
    }

    fn color(&self) -> Color {
        self.color
    }
}
