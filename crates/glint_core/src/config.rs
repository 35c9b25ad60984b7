//! Serde types for JSON scene descriptions.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!     "width": 800,
//!     "height": 600,
//!     "surfaces": [
//!         {
//!             "type": "sphere",
//!             "center": [0.0, 0.0, -5.0],
//!             "radius": 1.0,
//!             "color": [0.2, 1.0, 0.2],
//!             "material": { "kind": "diffuse", "albedo": 0.18 }
//!         }
//!     ],
//!     "lights": [
//!         {
//!             "type": "directional",
//!             "direction": [0.0, -1.0, -1.0],
//!             "color": [1.0, 1.0, 1.0],
//!             "intensity": 3.0
//!         }
//!     ]
//! }
//! ```
//!
//! Every field has a default (512x512, 90 degree fov, black background,
//! no surfaces, no lights).

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneResult;
use crate::light::{DirectionalLight, Light, PointLight};
use crate::material::Material;
use crate::scene::{Scene, DEFAULT_DIMENSION, DEFAULT_FOV};
use crate::surface::{Plane, Sphere, Surface};

/// A deserialized scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f64,
    pub background: [f64; 3],
    pub surfaces: Vec<SurfaceConfig>,
    pub lights: Vec<LightConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIMENSION,
            height: DEFAULT_DIMENSION,
            fov: DEFAULT_FOV,
            background: [0.0, 0.0, 0.0],
            surfaces: Vec::new(),
            lights: Vec::new(),
        }
    }
}

/// One surface entry in a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceConfig {
    Sphere {
        center: [f64; 3],
        radius: f64,
        color: [f64; 3],
        material: Material,
    },
    Plane {
        point: [f64; 3],
        normal: [f64; 3],
        color: [f64; 3],
        material: Material,
    },
}

/// One light entry in a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightConfig {
    Directional {
        /// Direction the light travels
        direction: [f64; 3],
        color: [f64; 3],
        intensity: f64,
    },
    Point {
        position: [f64; 3],
        color: [f64; 3],
        intensity: f64,
    },
}

impl SceneConfig {
    /// Build the validated, immutable scene this description names.
    pub fn build(self) -> SceneResult<Scene> {
        let mut builder = Scene::builder()
            .with_dimensions(self.width, self.height)
            .with_fov(self.fov)
            .with_background(Vec3::from_array(self.background));

        for surface in self.surfaces {
            builder = builder.add_surface(surface.into_surface());
        }
        for light in self.lights {
            builder = builder.add_light(light.into_light());
        }

        builder.build()
    }
}

impl SurfaceConfig {
    fn into_surface(self) -> Box<dyn Surface> {
        match self {
            SurfaceConfig::Sphere {
                center,
                radius,
                color,
                material,
            } => Box::new(Sphere::new(
                Vec3::from_array(center),
                radius,
                Vec3::from_array(color),
                material,
            )),
            SurfaceConfig::Plane {
                point,
                normal,
                color,
                material,
            } => Box::new(Plane::new(
                Vec3::from_array(point),
                Vec3::from_array(normal),
                Vec3::from_array(color),
                material,
            )),
        }
    }
}

impl LightConfig {
    fn into_light(self) -> Box<dyn Light> {
        match self {
            LightConfig::Directional {
                direction,
                color,
                intensity,
            } => Box::new(DirectionalLight::new(
                Vec3::from_array(direction),
                Vec3::from_array(color),
                intensity,
            )),
            LightConfig::Point {
                position,
                color,
                intensity,
            } => Box::new(PointLight::new(
                Vec3::from_array(position),
                Vec3::from_array(color),
                intensity,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_uses_defaults() {
        let config: SceneConfig = serde_json::from_str("{}").unwrap();
        let scene = config.build().unwrap();

        assert_eq!(scene.width(), 512);
        assert_eq!(scene.height(), 512);
        assert_eq!(scene.fov(), 90.0);
        assert!(scene.surfaces().is_empty());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_full_description_builds() {
        let json = r#"{
            "width": 64,
            "height": 32,
            "background": [0.1, 0.1, 0.1],
            "surfaces": [
                {
                    "type": "sphere",
                    "center": [0.0, 0.0, -5.0],
                    "radius": 1.0,
                    "color": [0.2, 1.0, 0.2],
                    "material": { "kind": "refractive",
                                  "refraction_index": 1.5,
                                  "transparency": 0.9 }
                },
                {
                    "type": "plane",
                    "point": [0.0, -2.0, 0.0],
                    "normal": [0.0, 1.0, 0.0],
                    "color": [1.0, 1.0, 1.0],
                    "material": { "kind": "diffuse", "albedo": 0.18 }
                }
            ],
            "lights": [
                {
                    "type": "point",
                    "position": [0.0, 5.0, -5.0],
                    "color": [1.0, 1.0, 1.0],
                    "intensity": 500.0
                }
            ]
        }"#;

        let config: SceneConfig = serde_json::from_str(json).unwrap();
        let scene = config.build().unwrap();

        assert_eq!(scene.width(), 64);
        assert_eq!(scene.height(), 32);
        assert_eq!(scene.surfaces().len(), 2);
        assert_eq!(scene.lights().len(), 1);
    }

    #[test]
    fn test_out_of_range_material_fails_build() {
        let json = r#"{
            "surfaces": [{
                "type": "sphere",
                "center": [0.0, 0.0, -5.0],
                "radius": 1.0,
                "color": [1.0, 1.0, 1.0],
                "material": { "kind": "diffuse", "albedo": 7.0 }
            }]
        }"#;

        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert!(config.build().is_err());
    }
}
