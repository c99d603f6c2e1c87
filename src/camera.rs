use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera described by eye position, look-at point, up vector, and
/// vertical field of view in degrees.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub eye: Point3,
    pub center: Point3,
    pub up: Vec3,
    pub fovy: f32,
}

impl Camera {
    pub fn new(eye: Point3, center: Point3, up: Vec3, fovy: f32) -> Camera {
        Camera {
            eye,
            center,
            up,
            fovy,
        }
    }

    /// Perspective ray through pixel (row `i`, column `j`) of a `height` x
    /// `width` image. Row 0 is the top of the image.
    ///
    /// Right-handed camera basis: `w` points backward (away from the view
    /// direction), `u` right, `v` up. The direction is left to the `Ray`
    /// constructor to normalize.
    pub fn get_ray(&self, i: usize, j: usize, height: usize, width: usize) -> Ray {
        let w = (self.eye - self.center).normalized();
        let u = self.up.cross(w).normalized();
        let v = w.cross(u);

        let fovy = self.fovy.to_radians();
        let half_height = (fovy / 2.0).tan();
        let x_range = half_height * width as f32 / height as f32;
        let b = half_height * (height as f32 / 2.0 - i as f32) / (height as f32 / 2.0);
        let a = x_range * (j as f32 - width as f32 / 2.0) / (width as f32 / 2.0);
        Ray::new(self.eye, -w + u * a + v * b)
    }
}
