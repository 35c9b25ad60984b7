//! Scene aggregate and its validating builder.

use glint_math::Vec3;

use crate::error::{SceneError, SceneResult};
use crate::light::Light;
use crate::material::Color;
use crate::surface::Surface;

/// Default image width and height in pixels.
pub const DEFAULT_DIMENSION: u32 = 512;
/// Default vertical field of view in degrees.
pub const DEFAULT_FOV: f64 = 90.0;

/// An immutable scene: surfaces, lights, image dimensions and camera
/// field of view.
///
/// Nothing in a `Scene` is mutated once it is built, which is what makes
/// concurrent read access from render workers safe without locking.
pub struct Scene {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<Box<dyn Light>>,
    width: u32,
    height: u32,
    fov: f64,
    background: Color,
    // Derived, frozen at construction
    aspect_ratio: f64,
    fov_adjustment: f64,
}

impl Scene {
    /// Start building a scene with the default settings
    /// (512x512, 90 degree field of view, black background).
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    /// Ratio of the longer image side to the shorter one.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// tan(fov / 2), the sensor half-extent at unit focal distance.
    pub fn fov_adjustment(&self) -> f64 {
        self.fov_adjustment
    }
}

/// Builder for [`Scene`]; `build` validates dimensions, field of view and
/// every surface material before freezing the scene.
pub struct SceneBuilder {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<Box<dyn Light>>,
    width: u32,
    height: u32,
    fov: f64,
    background: Color,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            fov: DEFAULT_FOV,
            background: Vec3::ZERO,
        }
    }
}

impl SceneBuilder {
    /// Set image resolution.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    /// Set the background color used where rays escape the scene.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a surface to the scene.
    pub fn add_surface(mut self, surface: Box<dyn Surface>) -> Self {
        self.surfaces.push(surface);
        self
    }

    /// Add a light to the scene.
    pub fn add_light(mut self, light: Box<dyn Light>) -> Self {
        self.lights.push(light);
        self
    }

    /// Validate the configuration and freeze it into a `Scene`.
    pub fn build(self) -> SceneResult<Scene> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::InvalidFov(self.fov));
        }
        for surface in &self.surfaces {
            surface.material().validate()?;
        }

        let fov_radians = self.fov.to_radians();
        let fov_adjustment = (fov_radians / 2.0).tan();
        let (w, h) = (self.width as f64, self.height as f64);
        let aspect_ratio = if self.width > self.height { w / h } else { h / w };

        log::debug!(
            "scene frozen: {}x{}, fov {} deg, {} surface(s), {} light(s)",
            self.width,
            self.height,
            self.fov,
            self.surfaces.len(),
            self.lights.len()
        );

        Ok(Scene {
            surfaces: self.surfaces,
            lights: self.lights,
            width: self.width,
            height: self.height,
            fov: self.fov,
            background: self.background,
            aspect_ratio,
            fov_adjustment,
        })
    }
}
