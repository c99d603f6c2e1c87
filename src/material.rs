use crate::math::RGBColor;

/// Phong material: ambient base plus per-light diffuse and specular terms.
#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub ambient: RGBColor,
    pub diffuse: RGBColor,
    pub specular: RGBColor,
    /// Specular exponent, >= 0.
    pub shininess: f32,
}

impl Material {
    pub const fn new(
        ambient: RGBColor,
        diffuse: RGBColor,
        specular: RGBColor,
        shininess: f32,
    ) -> Material {
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Flat gray fallback, useful in tests.
    pub const fn matte(diffuse: RGBColor) -> Material {
        Material::new(RGBColor::BLACK, diffuse, RGBColor::BLACK, 0.0)
    }
}
