//! Simple ray tracer example.
//!
//! Renders three spheres over a ground plane and saves a PNG.

use glint_renderer::{render, Color, Material, RenderConfig, Scene, Vec3};

use glint_core::{DirectionalLight, Plane, PointLight, Sphere};

fn main() {
    env_logger::init();

    let scene = build_scene();

    println!("Rendering {}x{}...", scene.width(), scene.height());
    let start = std::time::Instant::now();
    let image = render(
        &scene,
        &RenderConfig {
            threads: 4,
            progress: true,
        },
    )
    .expect("render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save(filename).expect("Failed to save image");
    println!("Saved to {filename}");
}

fn build_scene() -> Scene {
    Scene::builder()
        .with_dimensions(800, 600)
        .with_fov(90.0)
        .with_background(Color::new(0.05, 0.07, 0.1))
        // Ground
        .add_surface(Box::new(Plane::new(
            Vec3::new(0.0, -2.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Color::new(0.6, 0.6, 0.6),
            Material::Diffuse { albedo: 0.18 },
        )))
        // Matte green sphere
        .add_surface(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Color::new(0.2, 0.8, 0.2),
            Material::Diffuse { albedo: 0.3 },
        )))
        // Mirror sphere
        .add_surface(Box::new(Sphere::new(
            Vec3::new(-2.5, 0.5, -6.5),
            1.5,
            Color::new(0.9, 0.9, 0.9),
            Material::Reflective {
                albedo: 0.25,
                reflectivity: 0.7,
            },
        )))
        // Glass sphere
        .add_surface(Box::new(Sphere::new(
            Vec3::new(2.2, -0.5, -4.0),
            1.0,
            Color::new(1.0, 1.0, 1.0),
            Material::Refractive {
                refraction_index: 1.5,
                transparency: 0.9,
            },
        )))
        .add_light(Box::new(DirectionalLight::new(
            Vec3::new(-0.5, -1.0, -0.7),
            Color::new(1.0, 1.0, 1.0),
            2.5,
        )))
        .add_light(Box::new(PointLight::new(
            Vec3::new(3.0, 4.0, -3.0),
            Color::new(1.0, 0.9, 0.7),
            600.0,
        )))
        .build()
        .expect("demo scene is valid")
}
