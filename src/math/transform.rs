use crate::math::{Point3, Ray, Vec3};

use nalgebra::{Matrix4, Vector3, Vector4};

/// Object-to-world matrix paired with its precomputed inverse. The pair is
/// immutable after construction, so `reverse` stays the exact inverse of
/// `forward` for the lifetime of the scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform3 {
    pub forward: Matrix4<f32>,
    pub reverse: Matrix4<f32>,
}

impl Transform3 {
    /// None if the matrix is singular.
    pub fn from_matrix(forward: Matrix4<f32>) -> Option<Self> {
        forward
            .try_inverse()
            .map(|reverse| Transform3 { forward, reverse })
    }

    pub fn from_raw(forward: Matrix4<f32>, reverse: Matrix4<f32>) -> Self {
        Transform3 { forward, reverse }
    }

    pub fn identity() -> Self {
        Transform3::from_raw(Matrix4::identity(), Matrix4::identity())
    }

    pub fn from_translation(shift: Vec3) -> Self {
        let v = Vector3::new(shift.x, shift.y, shift.z);
        Transform3::from_raw(
            Matrix4::new_translation(&v),
            Matrix4::new_translation(&-v),
        )
    }

    /// Components must be nonzero; validated by the scene parser.
    pub fn from_scale(scale: Vec3) -> Self {
        Transform3::from_raw(
            Matrix4::new_nonuniform_scaling(&Vector3::new(scale.x, scale.y, scale.z)),
            Matrix4::new_nonuniform_scaling(&Vector3::new(
                1.0 / scale.x,
                1.0 / scale.y,
                1.0 / scale.z,
            )),
        )
    }

    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let axisangle = radians * Vector3::new(axis.x, axis.y, axis.z).normalize();
        Transform3::from_raw(
            Matrix4::from_scaled_axis(axisangle),
            Matrix4::from_scaled_axis(-axisangle),
        )
    }

    /// Composes scale, then rotation, then translation (applied to points in
    /// that order).
    pub fn from_stack(
        scale: Option<Transform3>,
        rotate: Option<Transform3>,
        translate: Option<Transform3>,
    ) -> Self {
        let mut stack = Transform3::identity();
        for transform in [scale, rotate, translate].iter().flatten() {
            stack = Transform3::from_raw(
                transform.forward * stack.forward,
                stack.reverse * transform.reverse,
            );
        }
        stack
    }

    pub fn inverse(self) -> Transform3 {
        Transform3::from_raw(self.reverse, self.forward)
    }

    // points extend to homogeneous w=1 and divide through afterwards, which
    // keeps non-affine transforms correct
    fn apply_point(matrix: &Matrix4<f32>, point: Point3) -> Point3 {
        let h = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
        Point3::new(h.x / h.w, h.y / h.w, h.z / h.w)
    }

    // directions extend with w=0; no divide, and no renormalization
    fn apply_vector(matrix: &Matrix4<f32>, vector: Vec3) -> Vec3 {
        let h = matrix * Vector4::new(vector.x, vector.y, vector.z, 0.0);
        Vec3::new(h.x, h.y, h.z)
    }

    pub fn to_local_point(&self, point: Point3) -> Point3 {
        Self::apply_point(&self.reverse, point)
    }

    pub fn to_world_point(&self, point: Point3) -> Point3 {
        Self::apply_point(&self.forward, point)
    }

    pub fn to_local_vector(&self, vector: Vec3) -> Vec3 {
        Self::apply_vector(&self.reverse, vector)
    }

    pub fn to_world_vector(&self, vector: Vec3) -> Vec3 {
        Self::apply_vector(&self.forward, vector)
    }

    /// World ray into the object's local frame. The `Ray` constructor
    /// renormalizes the transformed direction, so local hit distances are in
    /// local units and must be re-measured in world space by the caller.
    pub fn to_local(&self, ray: Ray) -> Ray {
        Ray::new(
            self.to_local_point(ray.origin),
            self.to_local_vector(ray.direction),
        )
    }

    pub fn to_world(&self, ray: Ray) -> Ray {
        Ray::new(
            self.to_world_point(ray.origin),
            self.to_world_vector(ray.direction),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point3, b: Point3) {
        assert!((a - b).norm() < 1e-4, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_reverse_is_inverse() {
        let transform = Transform3::from_stack(
            Some(Transform3::from_scale(Vec3::new(3.0, 1.0, 0.5))),
            Some(Transform3::from_axis_angle(Vec3::Z, 1.0)),
            Some(Transform3::from_translation(Vec3::new(1.0, -2.0, 4.0))),
        );
        let product = transform.forward * transform.reverse;
        let identity = Matrix4::<f32>::identity();
        assert!((product - identity).amax() < 1e-4);
    }

    #[test]
    fn test_round_trip() {
        let transform = Transform3::from_stack(
            Some(Transform3::from_scale(Vec3::new(2.0, 2.0, 2.0))),
            Some(Transform3::from_axis_angle(Vec3::Y, 0.7)),
            Some(Transform3::from_translation(Vec3::new(0.0, 1.0, 0.0))),
        );
        let p = Point3::new(0.3, -0.7, 2.0);
        assert_close(transform.to_world_point(transform.to_local_point(p)), p);
        assert_close(transform.to_local_point(transform.to_world_point(p)), p);
    }

    #[test]
    fn test_stack_order() {
        // scale then translate: local (1,0,0) ends up at (2,0,0) + shift
        let transform = Transform3::from_stack(
            Some(Transform3::from_scale(Vec3::new(2.0, 2.0, 2.0))),
            None,
            Some(Transform3::from_translation(Vec3::new(5.0, 0.0, 0.0))),
        );
        assert_close(
            transform.to_world_point(Point3::new(1.0, 0.0, 0.0)),
            Point3::new(7.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_perspective_divide() {
        // a projective matrix with a non-trivial bottom row exercises the
        // homogeneous divide
        let mut m = Matrix4::identity();
        m[(3, 2)] = 0.5;
        let transform = Transform3::from_matrix(m).unwrap();
        let p = transform.to_world_point(Point3::new(1.0, 2.0, 2.0));
        assert_close(p, Point3::new(0.5, 1.0, 1.0));
    }
}
