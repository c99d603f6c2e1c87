use std::sync::Arc;

use crate::math::{Point3, RGBColor, Ray};
use crate::world::{Light, Object, World};

/// Hard ceiling on trace depth. Tracing is currently non-recursive, so this
/// only guards the entry-point contract: callers start at depth 0 and any
/// depth beyond the ceiling yields black.
pub const DEFAULT_MAX_DEPTH: u16 = 5;

/// Distance below which a shadow ray's nearest hit counts as the shaded
/// point itself.
const SHADOW_TOLERANCE: f32 = 1e-3;

/// Local Phong illumination over a shared, read-only world.
pub struct PhongIntegrator {
    pub world: Arc<World>,
    pub max_depth: u16,
}

impl PhongIntegrator {
    pub fn new(world: Arc<World>, max_depth: u16) -> Self {
        PhongIntegrator { world, max_depth }
    }

    /// Trace entry point. Black past the depth ceiling, black on a miss,
    /// otherwise ambient plus the per-light Phong terms. No clamping happens
    /// here.
    pub fn trace(&self, r: Ray, depth: u16) -> RGBColor {
        if depth > self.max_depth {
            return RGBColor::BLACK;
        }
        let record = match self.world.hit(r) {
            Some(record) => record,
            None => return RGBColor::BLACK,
        };
        let object = self.world.object(record.instance_id);

        let mut color = object.material.ambient;
        for light in self.world.lights.iter() {
            match light {
                Light::Point { position, .. } => {
                    if self.unoccluded(*position, record.point) {
                        color += self.shade(light, object, r, record.point);
                    }
                }
                // directional lights are infinitely distant and never
                // shadow-tested
                Light::Directional { .. } => {
                    color += self.shade(light, object, r, record.point);
                }
            }
        }
        color
    }

    /// True when nothing lies strictly between the light position and
    /// `point`: the shadow ray's nearest hit is the shaded point itself, or
    /// the ray escapes the scene entirely.
    fn unoccluded(&self, light_position: Point3, point: Point3) -> bool {
        let shadow_ray = Ray::new(light_position, point - light_position);
        match self.world.hit(shadow_ray) {
            Some(record) => (record.point - point).norm() < SHADOW_TOLERANCE,
            None => true,
        }
    }

    /// Diffuse and specular contribution of one light; ambient is the
    /// caller's responsibility.
    fn shade(&self, light: &Light, object: &Object, r: Ray, point: Point3) -> RGBColor {
        let light_direction = light.direction_from(point);
        let normal = object.normal_at(point);
        let material = &object.material;

        let n_dot_l = (normal * light_direction).max(0.0);
        let diffuse = material.diffuse * light.color() * n_dot_l;

        let half = (light_direction + (-r.direction).normalized()).normalized();
        let n_dot_h = (normal * half).max(0.0);
        let specular = material.specular * light.color() * n_dot_h.powf(material.shininess);

        diffuse + specular
    }
}
