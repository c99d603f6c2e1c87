use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

/// Linear RGB. Accumulation during shading is unbounded; clamping to
/// displayable range happens at the output stage.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

// component-wise, used for filtering light color through a material color
impl Mul for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for RGBColor {
    fn mul_assign(&mut self, other: RGBColor) {
        *self = *self * other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        RGBColor::new(self.r / other, self.g / other, self.b / other)
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(v: [f32; 3]) -> RGBColor {
        RGBColor::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_wise_ops() {
        let a = RGBColor::new(0.5, 1.0, 2.0);
        let b = RGBColor::new(1.0, 0.5, 0.25);
        assert_eq!(a * b, RGBColor::new(0.5, 0.5, 0.5));
        assert_eq!(a + RGBColor::BLACK, a);
        assert_eq!(a * 2.0, RGBColor::new(1.0, 2.0, 4.0));
    }
}
