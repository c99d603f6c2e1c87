mod color;
mod point;
mod ray;
mod transform;
mod vec;

pub use color::RGBColor;
pub use point::Point3;
pub use ray::Ray;
pub use transform::Transform3;
pub use vec::Vec3;

/// Tolerance below which floating values are classified as zero by the
/// intersection routines.
pub const EPSILON: f32 = 1e-6;

/// Three-way classification of `x` against [`EPSILON`].
pub fn sign(x: f32) -> i32 {
    if x > EPSILON {
        1
    } else if x < -EPSILON {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(sign(1e-7), 0);
        assert_eq!(sign(-1e-7), 0);
        assert_eq!(sign(1e-3), 1);
        assert_eq!(sign(-1e-3), -1);
    }
}
