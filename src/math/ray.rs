use crate::math::{Point3, Vec3};

/// Half-line `origin + t * direction, t >= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    /// Callers may pass an unnormalized direction; it is normalized here so
    /// intersection routines can assume unit length.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn point_at_parameter(self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
}
