use crate::math::{sign, Point3, Ray, Vec3, EPSILON};

/// Vertices and per-vertex normals, indexed by position.
#[derive(Copy, Clone, Debug)]
pub struct Triangle {
    pub vertices: [Point3; 3],
    pub normals: [Vec3; 3],
}

impl Triangle {
    pub const fn new(vertices: [Point3; 3], normals: [Vec3; 3]) -> Triangle {
        Triangle { vertices, normals }
    }

    /// All three vertex normals set to the face normal.
    pub fn with_face_normal(vertices: [Point3; 3]) -> Triangle {
        let normal = (vertices[1] - vertices[0])
            .cross(vertices[2] - vertices[0])
            .normalized();
        Triangle::new(vertices, [normal; 3])
    }

    pub fn face_normal(&self) -> Vec3 {
        (self.vertices[1] - self.vertices[0])
            .cross(self.vertices[2] - self.vertices[0])
            .normalized()
    }

    /// Plane intersection followed by the convexity containment test: the sum
    /// of the unsigned sub-triangle areas around the candidate point matches
    /// the magnitude of their vector sum only when the point is inside.
    pub fn intersect(&self, r: Ray) -> Option<f32> {
        let [a, _, _] = self.vertices;
        let n = self.face_normal();

        // ray parallel to the plane
        if sign(r.direction * n) == 0 {
            return None;
        }

        let time = ((a - r.origin) * n) / (r.direction * n);
        if time < EPSILON {
            return None;
        }

        let p = r.point_at_parameter(time);
        let mut area_vec = Vec3::ZERO;
        let mut abs_area = 0.0;
        for i in 0..3 {
            let partial = (p - self.vertices[i]).cross(p - self.vertices[(i + 1) % 3]);
            abs_area += partial.norm();
            area_vec = area_vec + partial;
        }
        if sign(abs_area - area_vec.norm()) == 0 {
            Some(time)
        } else {
            None
        }
    }

    /// Barycentric blend of the vertex normals at `point`, which is expected
    /// to lie on the triangle.
    pub fn normal_at(&self, point: Point3) -> Vec3 {
        let [a, b, c] = self.vertices;
        let total = (b - a).cross(c - a).norm();
        let weight_a = (point - b).cross(point - c).norm() / total;
        let weight_b = (point - c).cross(point - a).norm() / total;
        let weight_c = (point - a).cross(point - b).norm() / total;
        (self.normals[0] * weight_a + self.normals[1] * weight_b + self.normals[2] * weight_c)
            .normalized()
    }
}
