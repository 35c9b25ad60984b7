//! Surface trait and built-in primitives.

use glint_math::{Ray, Vec3};

use crate::material::{Color, Material};

/// A geometric surface the renderer can hit with rays.
///
/// The renderer only sees surfaces through this interface; the concrete
/// geometry stays opaque to it.
pub trait Surface: Send + Sync {
    /// Distance along the ray to the nearest hit, if any.
    ///
    /// A valid hit distance is strictly positive.
    fn intersects(&self, ray: &Ray) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Unlit base color at a point on the surface.
    fn base_color_at(&self, point: Vec3) -> Color;

    /// Material carried by this surface.
    fn material(&self) -> &Material;
}

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    color: Color,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, color: Color, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersects(&self, ray: &Ray) -> Option<f64> {
        // Geometric solution: project the center onto the ray, then check
        // the perpendicular distance against the radius.
        let to_center = self.center - ray.origin();
        let tca = to_center.dot(ray.direction());
        let d2 = to_center.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;

        // t0 <= t1; take the nearest strictly positive root. The second
        // root covers rays starting inside the sphere (refraction exits).
        if t0 > 0.0 {
            Some(t0)
        } else if t1 > 0.0 {
            Some(t1)
        } else {
            None
        }
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    fn base_color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// An infinite plane primitive.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    color: Color,
    material: Material,
}

impl Plane {
    /// Create a new plane through `point` with the given normal.
    /// The normal is normalized on construction.
    pub fn new(point: Vec3, normal: Vec3, color: Color, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            color,
            material,
        }
    }
}

impl Surface for Plane {
    fn intersects(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < 1e-9 {
            // Ray parallel to the plane
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        (t > 0.0).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn base_color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
