//! Recursive shading engine.
//!
//! Computes the outgoing color for a ray/surface/distance triple,
//! dispatching on the surface material: direct diffuse lighting with
//! shadow rays, mirror reflection, and dielectric refraction blended by
//! Fresnel reflectance. Reflection, refraction and shadow rays all feed
//! back through the nearest-hit query, so the recursion is bounded by an
//! explicit depth limit.

use std::f64::consts::PI;

use glint_core::{Color, Material, Scene, Surface};
use glint_math::{Ray, Vec3};

use crate::error::ShadingError;
use crate::intersection::closest_intersection;

/// Shading recursion stops once depth exceeds this bound; the remaining
/// energy is dropped.
pub const MAX_RECURSION_DEPTH: u32 = 10;

/// Offset along the surface normal applied to secondary-ray origins so a
/// ray never re-hits the surface it just left ("shadow acne").
pub const SHADOW_BIAS: f64 = 1e-13;

/// Compute the color leaving `surface` back along `ray`.
///
/// `depth` is 1 on the primary call and increments through reflection and
/// refraction; past [`MAX_RECURSION_DEPTH`] the result is black.
pub fn shade(
    scene: &Scene,
    ray: &Ray,
    surface: &dyn Surface,
    distance: f64,
    depth: u32,
) -> Result<Color, ShadingError> {
    if depth > MAX_RECURSION_DEPTH {
        return Ok(Color::ZERO);
    }

    let hit_point = ray.at(distance);
    let normal = surface.normal_at(hit_point);

    match *surface.material() {
        Material::Diffuse { albedo } => {
            Ok(diffuse_color(scene, surface, hit_point, normal, albedo))
        }
        Material::Reflective {
            albedo,
            reflectivity,
        } => {
            let diffuse = diffuse_color(scene, surface, hit_point, normal, albedo);
            reflective_color(scene, diffuse, hit_point, normal, ray, reflectivity, depth)
        }
        Material::Refractive {
            refraction_index,
            transparency,
        } => refractive_color(
            scene,
            surface,
            hit_point,
            normal,
            ray,
            refraction_index,
            transparency,
            depth,
        ),
        ref material => Err(ShadingError::UnknownMaterial(format!("{material:?}"))),
    }
}

/// Direct illumination with shadow tests, accumulated over all lights.
///
/// With no lights in the scene the surface shows its unlit base color.
fn diffuse_color(
    scene: &Scene,
    surface: &dyn Surface,
    hit_point: Vec3,
    normal: Vec3,
    albedo: f64,
) -> Color {
    let base_color = surface.base_color_at(hit_point);
    if scene.lights().is_empty() {
        return base_color;
    }

    let mut fill = Color::ZERO;
    for light in scene.lights() {
        // Lights promise only "toward the light", not unit length.
        let direction_to_light = light.direction_from(hit_point).normalize();

        let shadow_ray = Ray::new(hit_point + normal * SHADOW_BIAS, direction_to_light);
        let lit = match closest_intersection(&shadow_ray, scene.surfaces()) {
            None => true,
            Some(occluder) => occluder.distance > light.distance_from(hit_point),
        };

        let intensity = if lit { light.intensity_at(hit_point) } else { 0.0 };
        let power = normal.dot(direction_to_light).max(0.0) * intensity;
        let reflected = albedo / PI;

        let light_color =
            (light.color() * power * reflected).clamp(Color::ZERO, Color::ONE);
        fill += light_color * base_color;
    }

    fill
}

/// Blend `current` with the recursively shaded mirror reflection.
///
/// If the reflection ray escapes the scene, `current` passes through
/// unchanged.
fn reflective_color(
    scene: &Scene,
    current: Color,
    hit_point: Vec3,
    normal: Vec3,
    ray: &Ray,
    reflectivity: f64,
    depth: u32,
) -> Result<Color, ShadingError> {
    let reflection_ray = Ray::new(
        hit_point + normal * SHADOW_BIAS,
        reflect(ray.direction(), normal),
    );

    match closest_intersection(&reflection_ray, scene.surfaces()) {
        Some(hit) => {
            let reflected = shade(scene, &reflection_ray, hit.surface, hit.distance, depth + 1)?;
            Ok(current * (1.0 - reflectivity) + reflected * reflectivity)
        }
        None => Ok(current),
    }
}

/// Fresnel-weighted blend of recursive reflection and transmission,
/// modulated by the surface's unlit base color.
#[allow(clippy::too_many_arguments)]
fn refractive_color(
    scene: &Scene,
    surface: &dyn Surface,
    hit_point: Vec3,
    normal: Vec3,
    ray: &Ray,
    refraction_index: f64,
    transparency: f64,
    depth: u32,
) -> Result<Color, ShadingError> {
    let kr = fresnel(ray.direction(), normal, refraction_index);

    // Total internal reflection at the boundary: no energy transmits and
    // this term contributes nothing.
    if kr >= 1.0 {
        return Ok(Color::ZERO);
    }

    let mut refraction = Color::ZERO;
    if let Some(transmission_ray) = transmission_ray(ray, hit_point, normal, refraction_index) {
        if let Some(hit) = closest_intersection(&transmission_ray, scene.surfaces()) {
            refraction = shade(scene, &transmission_ray, hit.surface, hit.distance, depth + 1)?;
        }
    }

    let mut reflection = Color::ZERO;
    let reflection_ray = Ray::new(
        hit_point + normal * SHADOW_BIAS,
        reflect(ray.direction(), normal),
    );
    if let Some(hit) = closest_intersection(&reflection_ray, scene.surfaces()) {
        reflection = shade(scene, &reflection_ray, hit.surface, hit.distance, depth + 1)?;
    }

    let blend = reflection * kr + refraction * (1.0 - kr) * transparency;
    Ok(surface.base_color_at(hit_point) * blend)
}

/// Build the transmission ray through a dielectric boundary via Snell's
/// law, or `None` when refraction is geometrically impossible (total
/// internal reflection).
fn transmission_ray(ray: &Ray, hit_point: Vec3, normal: Vec3, refraction_index: f64) -> Option<Ray> {
    let mut ref_n = normal;
    let mut eta_i = 1.0;
    let mut eta_t = refraction_index;
    let mut i_dot_n = ray.direction().dot(normal);

    if i_dot_n < 0.0 {
        // Entering the medium from outside
        i_dot_n = -i_dot_n;
    } else {
        // Exiting: flip the normal and swap the indices
        ref_n = -normal;
        eta_i = refraction_index;
        eta_t = 1.0;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - i_dot_n * i_dot_n);
    if k <= 0.0 {
        return None;
    }

    let direction = (ray.direction() + i_dot_n * ref_n) * eta - ref_n * k.sqrt();
    // Origin offset lands on the far side of the boundary, opposite the
    // reflection ray's offset.
    Some(Ray::new(hit_point - ref_n * SHADOW_BIAS, direction))
}

/// Dielectric Fresnel reflectance `kr` in [0, 1].
///
/// Returns exactly 1.0 past the critical angle (total internal
/// reflection); otherwise the average of the squared s- and p-polarized
/// coefficients. Radicands are clamped to zero before the square roots.
pub fn fresnel(incident: Vec3, normal: Vec3, refraction_index: f64) -> f64 {
    let i_dot_n = incident.dot(normal);
    let mut eta_i = 1.0;
    let mut eta_t = refraction_index;
    if i_dot_n > 0.0 {
        // Ray is exiting the medium
        eta_i = refraction_index;
        eta_t = 1.0;
    }

    let sin_t = eta_i / eta_t * (1.0 - i_dot_n * i_dot_n).max(0.0).sqrt();
    if sin_t > 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = i_dot_n.abs();
    let r_s = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let r_p = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);
    (r_s * r_s + r_p * r_p) / 2.0
}

/// Mirror reflection of `v` about unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DirectionalLight, Plane, Sphere};

    fn unit_z_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    fn shade_first_hit(scene: &Scene, ray: &Ray) -> Color {
        let hit = closest_intersection(ray, scene.surfaces()).unwrap();
        shade(scene, ray, hit.surface, hit.distance, 1).unwrap()
    }

    #[test]
    fn test_no_lights_yields_unlit_base_color() {
        let base = Color::new(0.2, 0.7, 0.4);
        let scene = Scene::builder()
            .add_surface(Box::new(Sphere::new(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                base,
                Material::Diffuse { albedo: 0.5 },
            )))
            .build()
            .unwrap();

        assert_eq!(shade_first_hit(&scene, &unit_z_ray()), base);
    }

    #[test]
    fn test_occluded_point_gets_no_diffuse_contribution() {
        // Light arrives traveling (-1, 0, -1); the hit point on the target
        // sphere's front face is (0, 0, -4), so its shadow ray runs along
        // (1, 0, 1) and the occluder sits strictly between it and the light.
        let light = DirectionalLight::new(Vec3::new(-1.0, 0.0, -1.0), Color::ONE, 5.0);
        let target = Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Color::ONE,
            Material::Diffuse { albedo: 1.0 },
        );
        let occluder = Sphere::new(
            Vec3::new(2.0, 0.0, -2.0),
            1.0,
            Color::ONE,
            Material::Diffuse { albedo: 1.0 },
        );

        let occluded = Scene::builder()
            .add_surface(Box::new(target))
            .add_surface(Box::new(occluder))
            .add_light(Box::new(light))
            .build()
            .unwrap();
        assert_eq!(shade_first_hit(&occluded, &unit_z_ray()), Color::ZERO);

        // Same scene without the occluder must be lit.
        let light = DirectionalLight::new(Vec3::new(-1.0, 0.0, -1.0), Color::ONE, 5.0);
        let target = Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Color::ONE,
            Material::Diffuse { albedo: 1.0 },
        );
        let lit = Scene::builder()
            .add_surface(Box::new(target))
            .add_light(Box::new(light))
            .build()
            .unwrap();
        assert!(shade_first_hit(&lit, &unit_z_ray()).max_element() > 0.0);
    }

    #[test]
    fn test_facing_mirrors_terminate_at_depth_bound() {
        let mirror = Material::Reflective {
            albedo: 1.0,
            reflectivity: 1.0,
        };
        let scene = Scene::builder()
            .add_surface(Box::new(Plane::new(
                Vec3::new(0.0, 0.0, -2.0),
                Vec3::new(0.0, 0.0, 1.0),
                Color::ONE,
                mirror,
            )))
            .add_surface(Box::new(Plane::new(
                Vec3::new(0.0, 0.0, 2.0),
                Vec3::new(0.0, 0.0, -1.0),
                Color::ONE,
                mirror,
            )))
            .build()
            .unwrap();

        // The ray ping-pongs between the mirrors until the depth bound
        // cuts it off; with reflectivity 1 nothing else contributes.
        assert_eq!(shade_first_hit(&scene, &unit_z_ray()), Color::ZERO);
    }

    #[test]
    fn test_fresnel_normal_incidence_matches_closed_form() {
        let kr = fresnel(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, 1.0), 1.5);
        let expected = ((1.5_f64 - 1.0) / (1.5 + 1.0)).powi(2);
        assert!((kr - expected).abs() < 1e-6);
    }

    #[test]
    fn test_fresnel_total_internal_reflection_is_exactly_one() {
        // Exiting glass (n = 1.5) at 60 degrees, past the ~41.8 degree
        // critical angle. i_dot_n > 0 selects the exit side.
        let angle = 60f64.to_radians();
        let incident = Vec3::new(angle.sin(), 0.0, angle.cos());
        let normal = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(fresnel(incident, normal, 1.5), 1.0);

        // And no transmission ray is spawned for that geometry.
        let ray = Ray::new(Vec3::ZERO, incident);
        assert!(transmission_ray(&ray, Vec3::ZERO, normal, 1.5).is_none());
    }

    #[test]
    fn test_transmission_ray_is_unit_and_bends_toward_normal() {
        // Entering glass at 45 degrees.
        let incident = Vec3::new(1.0, 0.0, -1.0).normalize();
        let normal = Vec3::new(0.0, 0.0, 1.0);
        let ray = Ray::new(Vec3::new(-1.0, 0.0, 1.0), incident);

        let transmitted = transmission_ray(&ray, Vec3::ZERO, normal, 1.5).unwrap();
        let dir = transmitted.direction();

        assert!((dir.length() - 1.0).abs() < 1e-9);
        // Snell: sin(theta_t) = sin(45 deg) / 1.5
        let expected_sin = (45f64.to_radians()).sin() / 1.5;
        assert!((dir.x - expected_sin).abs() < 1e-9);
        assert!(dir.z < 0.0);
    }

    #[test]
    fn test_reflection_direction_is_mirror_and_unit() {
        let v = Vec3::new(1.0, -1.0, 0.0).normalize();
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = reflect(v, n);

        assert!((r - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-9);
        assert!((r.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflective_blend_against_diffuse_backdrop() {
        // Mirror sphere in front of the camera, red diffuse wall behind
        // it; no lights, so every diffuse term is an unlit base color.
        let wall_color = Color::new(1.0, 0.0, 0.0);
        let scene = Scene::builder()
            .add_surface(Box::new(Sphere::new(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Color::new(0.0, 0.0, 1.0),
                Material::Reflective {
                    albedo: 1.0,
                    reflectivity: 0.5,
                },
            )))
            .add_surface(Box::new(Plane::new(
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, -1.0),
                wall_color,
                Material::Diffuse { albedo: 1.0 },
            )))
            .build()
            .unwrap();

        // Head-on hit reflects straight back into the wall:
        // 0.5 * sphere base + 0.5 * wall base.
        let color = shade_first_hit(&scene, &unit_z_ray());
        assert!((color - Color::new(0.5, 0.0, 0.5)).length() < 1e-9);
    }
}
