use crate::math::{sign, Point3, Ray, Vec3, EPSILON};

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Point3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Distance along `r` to the nearest intersection in the ray's own units,
    /// solving `|o + t*d - center|^2 = r^2`. Hits at or behind the origin are
    /// rejected.
    pub fn intersect(&self, r: Ray) -> Option<f32> {
        let oc = r.origin - self.center;
        let c2 = r.direction * r.direction;
        let c1 = 2.0 * (r.direction * oc);
        let c0 = oc * oc - self.radius * self.radius;
        let delta = c1 * c1 - 4.0 * c2 * c0;
        if sign(delta) < 0 {
            return None;
        }
        // near-zero discriminants count as tangent hits
        let sqrt_delta = delta.abs().sqrt();
        let near = (-c1 - sqrt_delta) / (2.0 * c2);
        let far = (-c1 + sqrt_delta) / (2.0 * c2);
        // smaller of the positive roots
        let time = if near > EPSILON { near } else { far };
        if time > EPSILON {
            Some(time)
        } else {
            None
        }
    }

    pub fn normal_at(&self, point: Point3) -> Vec3 {
        (point - self.center).normalized()
    }
}
