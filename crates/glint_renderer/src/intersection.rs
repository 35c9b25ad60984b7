//! Nearest-hit intersection query.

use glint_core::Surface;
use glint_math::Ray;

/// The nearest surface a ray hits, and how far along the ray.
pub struct Intersection<'a> {
    pub surface: &'a dyn Surface,
    pub distance: f64,
}

/// Find the nearest surface the ray hits.
///
/// Non-positive distances are discarded. Ties at the minimum distance go
/// to whichever surface comes first in the input order (the strict `<`
/// never replaces an equal-distance hit). Read-only over the immutable
/// surface slice, so it is safe to call from any number of workers.
pub fn closest_intersection<'a>(
    ray: &Ray,
    surfaces: &'a [Box<dyn Surface>],
) -> Option<Intersection<'a>> {
    let mut nearest: Option<Intersection<'a>> = None;

    for surface in surfaces {
        if let Some(distance) = surface.intersects(ray) {
            if distance <= 0.0 {
                continue;
            }
            if nearest.as_ref().map_or(true, |hit| distance < hit.distance) {
                nearest = Some(Intersection {
                    surface: surface.as_ref(),
                    distance,
                });
            }
        }
    }

    nearest
}
