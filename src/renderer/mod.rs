mod film;

pub use film::Film;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;

use crate::integrator::{PhongIntegrator, DEFAULT_MAX_DEPTH};
use crate::math::RGBColor;
use crate::parsing::config::RenderSettings;
use crate::world::World;

pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    /// One camera ray per pixel. Pixels are independent given the read-only
    /// world, so the film buffer is split across the rayon pool with no
    /// coordination; a degenerate hit in one pixel cannot affect another.
    pub fn render(&self, world: Arc<World>, settings: &RenderSettings) -> Film<RGBColor> {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let camera = world.camera;
        let integrator =
            PhongIntegrator::new(world, settings.max_depth.unwrap_or(DEFAULT_MAX_DEPTH));

        let mut film: Film<RGBColor> = Film::new(width, height, RGBColor::BLACK);
        film.buffer
            .par_iter_mut()
            .enumerate()
            .for_each(|(pixel_index, pixel_ref)| {
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;
                let r = camera.get_ray(y, x, height, width);
                *pixel_ref = integrator.trace(r, 0);
            });

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("render took {}s", elapsed);
        film
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

/// Clamps to [0, 1], converts to 8-bit RGB, and writes a PNG under `output/`.
pub fn output_film(film: &Film<RGBColor>, settings: &RenderSettings) -> anyhow::Result<()> {
    let filename = settings
        .filename
        .clone()
        .unwrap_or_else(|| String::from("beauty"));
    let png_filename = format!("output/{}.png", filename);

    let mut bytes = Vec::with_capacity(film.total_pixels() * 3);
    for color in film.buffer.iter() {
        bytes.push((color.r.clamp(0.0, 1.0) * 255.0) as u8);
        bytes.push((color.g.clamp(0.0, 1.0) * 255.0) as u8);
        bytes.push((color.b.clamp(0.0, 1.0) * 255.0) as u8);
    }

    std::fs::create_dir_all(Path::new("output")).context("failed to create output directory")?;
    image::save_buffer(
        &png_filename,
        &bytes,
        film.width as u32,
        film.height as u32,
        image::ExtendedColorType::Rgb8,
    )
    .with_context(|| format!("failed to write {}", png_filename))?;
    info!("wrote {}", png_filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::geometry::{Primitive, Sphere};
    use crate::material::Material;
    use crate::math::{Point3, Vec3};
    use crate::parsing::config::Resolution;
    use crate::world::{Light, Object};

    fn settings(width: usize, height: usize) -> RenderSettings {
        RenderSettings {
            filename: None,
            resolution: Resolution { width, height },
            max_depth: None,
            threads: None,
        }
    }

    #[test]
    fn test_empty_world_renders_black() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, Vec3::Y, 60.0);
        let world = Arc::new(World::new(vec![], vec![], camera));
        let film = NaiveRenderer::new().render(world, &settings(16, 16));
        assert!(film.buffer.iter().all(|&c| c == RGBColor::BLACK));
    }

    #[test]
    fn test_sphere_covers_center_not_corners() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, Vec3::Y, 60.0);
        let sphere = Object::new(
            Primitive::from(Sphere::new(Point3::ORIGIN, 1.0)),
            None,
            Material::new(
                RGBColor::new(0.2, 0.0, 0.0),
                RGBColor::new(0.8, 0.0, 0.0),
                RGBColor::BLACK,
                1.0,
            ),
            0,
        );
        let light = Light::Directional {
            direction: Vec3::Z,
            color: RGBColor::new(1.0, 1.0, 1.0),
        };
        let world = Arc::new(World::new(vec![sphere], vec![light], camera));
        let film = NaiveRenderer::new().render(world, &settings(64, 64));
        assert!(film.at(32, 32).r > 0.0);
        assert_eq!(film.at(0, 0), RGBColor::BLACK);
        assert_eq!(film.at(63, 63), RGBColor::BLACK);
    }
}
