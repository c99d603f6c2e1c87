mod light;

pub use light::Light;

use crate::camera::Camera;
use crate::geometry::Primitive;
use crate::material::Material;
use crate::math::{Point3, Ray, Transform3, Vec3};

/// A primitive placed in the world: optional object-to-world transform,
/// material, and an identifying index.
#[derive(Copy, Clone, Debug)]
pub struct Object {
    pub primitive: Primitive,
    pub transform: Option<Transform3>,
    pub material: Material,
    pub instance_id: usize,
}

impl Object {
    pub fn new(
        primitive: Primitive,
        transform: Option<Transform3>,
        material: Material,
        instance_id: usize,
    ) -> Self {
        Object {
            primitive,
            transform,
            material,
            instance_id,
        }
    }

    /// World-space hit for this object alone: `(distance, point)`, or None.
    ///
    /// With a transform present the ray is moved into the object's local
    /// frame, the primitive is intersected there, and the hit point is mapped
    /// back to world space. The returned distance is always re-measured in
    /// world space; local distances are not comparable across objects under
    /// non-uniform transforms.
    pub fn hit(&self, r: Ray) -> Option<(f32, Point3)> {
        match self.transform {
            Some(transform) => {
                let local_ray = transform.to_local(r);
                let local_time = self.primitive.intersect(local_ray)?;
                let point = transform.to_world_point(local_ray.point_at_parameter(local_time));
                Some(((point - r.origin).norm(), point))
            }
            None => {
                let time = self.primitive.intersect(r)?;
                Some((time, r.point_at_parameter(time)))
            }
        }
    }

    pub fn normal_at(&self, point: Point3) -> Vec3 {
        self.primitive.normal_at(point)
    }
}

/// World-space nearest-hit result.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub distance: f32,
    pub point: Point3,
    pub instance_id: usize,
}

/// Scene data: objects, lights, camera. Immutable once built, which is what
/// lets the renderer share it freely across threads.
#[derive(Clone, Debug)]
pub struct World {
    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl World {
    pub fn new(mut objects: Vec<Object>, lights: Vec<Light>, camera: Camera) -> World {
        // instance ids double as indices into the object list
        for (i, object) in objects.iter_mut().enumerate() {
            object.instance_id = i;
        }
        World {
            objects,
            lights,
            camera,
        }
    }

    pub fn object(&self, instance_id: usize) -> &Object {
        &self.objects[instance_id]
    }

    /// Nearest world-space intersection across all objects, or None. Ties on
    /// exact distance go to the earlier object in scene order.
    pub fn hit(&self, r: Ray) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;
        for object in self.objects.iter() {
            if let Some((distance, point)) = object.hit(r) {
                if nearest.map_or(true, |record| distance < record.distance) {
                    nearest = Some(HitRecord {
                        distance,
                        point,
                        instance_id: object.instance_id,
                    });
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Sphere;
    use crate::math::RGBColor;

    fn test_camera() -> Camera {
        Camera::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::ORIGIN,
            Vec3::Y,
            60.0,
        )
    }

    fn gray() -> Material {
        Material::matte(RGBColor::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_empty_world_never_hits() {
        let world = World::new(vec![], vec![], test_camera());
        for direction in [Vec3::X, Vec3::Y, Vec3::Z, -Vec3::Z, Vec3::new(1.0, 2.0, -0.5)] {
            let r = Ray::new(Point3::new(0.3, -0.2, 5.0), direction);
            assert!(world.hit(r).is_none());
        }
    }

    #[test]
    fn test_nearest_hit_wins() {
        let near = Object::new(
            Primitive::from(Sphere::new(Point3::new(0.0, 0.0, 2.0), 0.5)),
            None,
            gray(),
            0,
        );
        let far = Object::new(
            Primitive::from(Sphere::new(Point3::ORIGIN, 1.0)),
            None,
            gray(),
            0,
        );
        // scene order deliberately lists the far object first
        let world = World::new(vec![far, near], vec![], test_camera());
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let record = world.hit(r).unwrap();
        assert_eq!(record.instance_id, 1);
        assert!((record.distance - 2.5).abs() < 1e-4);
        assert!((record.point - Point3::new(0.0, 0.0, 2.5)).norm() < 1e-4);
    }

    #[test]
    fn test_transformed_hit_matches_direct_computation() {
        // unit sphere scaled by 2 and shifted: equivalent to a radius-2
        // sphere centered at (0, 1, 0)
        let transform = Transform3::from_stack(
            Some(Transform3::from_scale(Vec3::new(2.0, 2.0, 2.0))),
            None,
            Some(Transform3::from_translation(Vec3::new(0.0, 1.0, 0.0))),
        );
        let transformed = Object::new(
            Primitive::from(Sphere::new(Point3::ORIGIN, 1.0)),
            Some(transform),
            gray(),
            0,
        );
        let direct = Object::new(
            Primitive::from(Sphere::new(Point3::new(0.0, 1.0, 0.0), 2.0)),
            None,
            gray(),
            0,
        );
        let rays = [
            Ray::new(Point3::new(0.0, 1.0, 10.0), -Vec3::Z),
            Ray::new(Point3::new(0.5, 0.0, 8.0), Vec3::new(-0.05, 0.1, -1.0)),
        ];
        for r in rays {
            let (dist_a, point_a) = transformed.hit(r).unwrap();
            let (dist_b, point_b) = direct.hit(r).unwrap();
            assert!((dist_a - dist_b).abs() < 1e-3);
            assert!((point_a - point_b).norm() < 1e-3);
        }
    }

    #[test]
    fn test_nonuniform_scale_distance_measured_in_world() {
        // squash a unit sphere to z-thickness 0.5; the world hit must be at
        // z = 0.5, distance 4.5 from the origin of the ray
        let transform = Transform3::from_stack(
            Some(Transform3::from_scale(Vec3::new(1.0, 1.0, 0.5))),
            None,
            None,
        );
        let object = Object::new(
            Primitive::from(Sphere::new(Point3::ORIGIN, 1.0)),
            Some(transform),
            gray(),
            0,
        );
        let r = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let (distance, point) = object.hit(r).unwrap();
        assert!((distance - 4.5).abs() < 1e-4);
        assert!((point - Point3::new(0.0, 0.0, 0.5)).norm() < 1e-4);
    }
}
