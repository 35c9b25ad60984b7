//! Parallel render orchestration.
//!
//! Drives the pixel loop: rows are processed in order, the columns of
//! each row are shaded in parallel on a fixed-size worker pool, and every
//! finished pixel is stored into the shared framebuffer under its lock.
//! The scene is immutable, so workers read it without synchronization;
//! the framebuffer lock is held only for the single pixel store, never
//! across the shading recursion.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use glint_core::Scene;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::{RenderError, ShadingError};
use crate::framebuffer::Framebuffer;
use crate::intersection::closest_intersection;
use crate::shading::shade;

/// Render settings independent of the scene content.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Worker pool size
    pub threads: usize,
    /// Log row progress while rendering
    pub progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            progress: false,
        }
    }
}

/// Render the scene and return the finished framebuffer.
///
/// Pixels whose primary ray escapes the scene keep the background color.
/// A pixel whose shading fails is reported and left at the background;
/// the render still runs to completion and the error is returned at the
/// end rather than aborting the remaining pixels.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<Framebuffer, RenderError> {
    let camera = Camera::new(scene);
    let framebuffer = Mutex::new(Framebuffer::new(
        scene.width(),
        scene.height(),
        scene.background(),
    ));
    let failed = AtomicUsize::new(0);
    let first_error: Mutex<Option<ShadingError>> = Mutex::new(None);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let total = scene.width() as u64 * scene.height() as u64;
    pool.install(|| {
        let mut done: u64 = 0;
        let mut last_percent = u64::MAX;

        for y in 0..scene.height() {
            (0..scene.width()).into_par_iter().for_each(|x| {
                let ray = camera.primary_ray(x, y);
                let Some(hit) = closest_intersection(&ray, scene.surfaces()) else {
                    // Ray escaped the scene; the background stays.
                    return;
                };

                match shade(scene, &ray, hit.surface, hit.distance, 1) {
                    Ok(color) => {
                        framebuffer.lock().unwrap().set(x, y, color);
                    }
                    Err(err) => {
                        log::error!("pixel ({x}, {y}) failed to shade: {err}");
                        failed.fetch_add(1, Ordering::Relaxed);
                        let mut slot = first_error.lock().unwrap();
                        if slot.is_none() {
                            *slot = Some(err);
                        }
                    }
                }
            });

            done += scene.width() as u64;
            if config.progress {
                let percent = done * 100 / total;
                if percent != last_percent {
                    log::info!("rendered {percent}% ({done}/{total} pixels)");
                    last_percent = percent;
                }
            }
        }
    });

    let failed = failed.into_inner();
    if let Some(first) = first_error.into_inner().unwrap() {
        return Err(RenderError::Shading { failed, first });
    }

    Ok(framebuffer.into_inner().unwrap())
}
