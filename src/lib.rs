#[macro_use]
extern crate log;

pub mod camera;
pub mod geometry;
pub mod integrator;
pub mod material;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod renderer;
pub mod world;
