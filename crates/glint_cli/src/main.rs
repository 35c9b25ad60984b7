//! glint - render a JSON scene description to an image file.
//!
//! Usage: glint <scene.json> [output.png]

use std::time::Instant;

use anyhow::{Context, Result};
use glint_core::SceneConfig;
use glint_renderer::{render, RenderConfig};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let scene_path = args
        .next()
        .context("usage: glint <scene.json> [output.png]")?;
    let output_path = args.next().unwrap_or_else(|| "render.png".to_string());

    let text = std::fs::read_to_string(&scene_path)
        .with_context(|| format!("reading scene file {scene_path}"))?;
    let config: SceneConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {scene_path}"))?;
    let scene = config.build().context("building scene")?;

    log::info!(
        "rendering {}x{}: {} surface(s), {} light(s)",
        scene.width(),
        scene.height(),
        scene.surfaces().len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let image = render(
        &scene,
        &RenderConfig {
            progress: true,
            ..RenderConfig::default()
        },
    )
    .context("rendering scene")?;
    log::info!("rendered in {:?}", start.elapsed());

    image
        .save(&output_path)
        .with_context(|| format!("writing {output_path}"))?;
    println!("Saved to {output_path}");

    Ok(())
}
