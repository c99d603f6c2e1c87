use crate::math::{Point3, RGBColor, Vec3};

/// Point lights illuminate from a world position and are shadow-tested;
/// directional lights are treated as infinitely distant and always visible.
#[derive(Copy, Clone, Debug)]
pub enum Light {
    Point {
        position: Point3,
        color: RGBColor,
    },
    /// `direction` points from the surface toward the light and may be stored
    /// unnormalized; it is normalized at use.
    Directional {
        direction: Vec3,
        color: RGBColor,
    },
}

impl Light {
    pub fn color(&self) -> RGBColor {
        match self {
            Light::Point { color, .. } => *color,
            Light::Directional { color, .. } => *color,
        }
    }

    /// Unit vector from `point` toward the light.
    pub fn direction_from(&self, point: Point3) -> Vec3 {
        match self {
            Light::Point { position, .. } => (*position - point).normalized(),
            Light::Directional { direction, .. } => direction.normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from() {
        let point = Light::Point {
            position: Point3::new(0.0, 5.0, 0.0),
            color: RGBColor::new(1.0, 1.0, 1.0),
        };
        let d = point.direction_from(Point3::new(0.0, 1.0, 0.0));
        assert!((d - Vec3::Y).norm() < 1e-6);

        let directional = Light::Directional {
            direction: Vec3::new(0.0, 2.0, 0.0),
            color: RGBColor::new(1.0, 1.0, 1.0),
        };
        // stored direction is normalized at use, not negated
        let d = directional.direction_from(Point3::new(7.0, -3.0, 2.0));
        assert!((d - Vec3::Y).norm() < 1e-6);
    }
}
