pub use rayon::prelude::*;

pub use crate::camera::Camera;
pub use crate::geometry::{Primitive, Sphere, Triangle};
pub use crate::integrator::{PhongIntegrator, DEFAULT_MAX_DEPTH};
pub use crate::material::Material;
pub use crate::math::{sign, Point3, RGBColor, Ray, Transform3, Vec3, EPSILON};
pub use crate::renderer::Film;
pub use crate::world::{HitRecord, Light, Object, World};

pub use std::f32::consts::PI;
pub use std::f32::INFINITY;
