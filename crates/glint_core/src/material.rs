//! Material variants for surface shading.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// How a surface responds to light.
///
/// The enum is non-exhaustive so new material kinds can be added without
/// breaking downstream crates; a renderer matching on it must carry an
/// explicit arm for kinds it does not recognize.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Material {
    /// Lambertian surface lit directly by the scene lights.
    Diffuse {
        /// Diffuse reflectance, in [0, 1]
        albedo: f64,
    },
    /// Diffuse surface blended with a mirror reflection term.
    Reflective {
        /// Diffuse reflectance, in [0, 1]
        albedo: f64,
        /// Fraction of the mirror term in the blend, in [0, 1]
        reflectivity: f64,
    },
    /// Dielectric surface with Fresnel-weighted reflection and refraction.
    Refractive {
        /// Index of refraction (1.0 = air, 1.5 = glass), must be positive
        refraction_index: f64,
        /// Fraction of transmitted light kept, in [0, 1]
        transparency: f64,
    },
}

impl Material {
    /// Check the material parameters against their documented ranges.
    pub fn validate(&self) -> SceneResult<()> {
        match *self {
            Material::Diffuse { albedo } => {
                check_unit_range("albedo", albedo)?;
            }
            Material::Reflective {
                albedo,
                reflectivity,
            } => {
                check_unit_range("albedo", albedo)?;
                check_unit_range("reflectivity", reflectivity)?;
            }
            Material::Refractive {
                refraction_index,
                transparency,
            } => {
                if !(refraction_index > 0.0) {
                    return Err(SceneError::InvalidMaterial(format!(
                        "refraction_index {refraction_index} must be positive"
                    )));
                }
                check_unit_range("transparency", transparency)?;
            }
        }
        Ok(())
    }
}

fn check_unit_range(name: &str, value: f64) -> SceneResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::InvalidMaterial(format!(
            "{name} {value} must be in [0, 1]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_in_range_parameters() {
        assert!(Material::Diffuse { albedo: 0.0 }.validate().is_ok());
        assert!(Material::Diffuse { albedo: 1.0 }.validate().is_ok());
        assert!(Material::Reflective {
            albedo: 0.5,
            reflectivity: 1.0,
        }
        .validate()
        .is_ok());
        assert!(Material::Refractive {
            refraction_index: 1.5,
            transparency: 0.9,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_parameters() {
        assert!(Material::Diffuse { albedo: 1.5 }.validate().is_err());
        assert!(Material::Reflective {
            albedo: 0.5,
            reflectivity: -0.1,
        }
        .validate()
        .is_err());
        assert!(Material::Refractive {
            refraction_index: 0.0,
            transparency: 0.5,
        }
        .validate()
        .is_err());
        assert!(Material::Refractive {
            refraction_index: f64::NAN,
            transparency: 0.5,
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_material_json_round_trip() {
        let json = r#"{ "kind": "reflective", "albedo": 0.8, "reflectivity": 0.3 }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(
            material,
            Material::Reflective {
                albedo: 0.8,
                reflectivity: 0.3,
            }
        );
    }
}
