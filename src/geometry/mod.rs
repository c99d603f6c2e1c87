mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::math::{Point3, Ray, Vec3};

/// Closed set of primitive shapes. Intersection dispatch is an exhaustive
/// match, so there is no "unknown primitive" case at runtime.
#[derive(Copy, Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Triangle> for Primitive {
    fn from(data: Triangle) -> Self {
        Primitive::Triangle(data)
    }
}

impl Primitive {
    /// Local-space intersection: distance along `r` in the ray's own units,
    /// or None.
    pub fn intersect(&self, r: Ray) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(r),
            Primitive::Triangle(triangle) => triangle.intersect(r),
        }
    }

    /// Unit surface normal at `point`: radial for spheres, barycentric blend
    /// of vertex normals for triangles.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(point),
            Primitive::Triangle(triangle) => triangle.normal_at(point),
        }
    }
}
