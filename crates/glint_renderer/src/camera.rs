//! Camera for primary ray generation.

use glint_core::Scene;
use glint_math::{Ray, Vec3};

/// Pinhole camera at the world origin, looking down -z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    width: u32,
    height: u32,
    aspect_ratio: f64,
    fov_adjustment: f64,
}

impl Camera {
    /// Create the camera for a scene's image dimensions and field of view.
    pub fn new(scene: &Scene) -> Self {
        Self {
            width: scene.width(),
            height: scene.height(),
            aspect_ratio: scene.aspect_ratio(),
            fov_adjustment: scene.fov_adjustment(),
        }
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// The pixel center is mapped to normalized device coordinates in
    /// [-1, 1], scaled by tan(fov/2), and the longer image axis is
    /// stretched by the aspect ratio so pixels stay square.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let (w, h) = (self.width as f64, self.height as f64);
        let mut ray_x = ((x as f64 + 0.5) / w * 2.0 - 1.0) * self.fov_adjustment;
        let mut ray_y = (1.0 - (y as f64 + 0.5) / h * 2.0) * self.fov_adjustment;

        if self.width > self.height {
            ray_x *= self.aspect_ratio;
        } else {
            ray_y *= self.aspect_ratio;
        }

        Ray::new(Vec3::ZERO, Vec3::new(ray_x, ray_y, -1.0))
    }
}
