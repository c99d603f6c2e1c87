pub mod config;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::geometry::{Primitive, Sphere, Triangle};
use crate::material::Material;
use crate::math::{Point3, RGBColor, Transform3, Vec3, EPSILON};
use crate::world::{Light, Object, World};

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];
pub type ColorData = [f32; 3];

#[derive(Serialize, Deserialize, Copy, Clone)]
pub struct Transform3Data {
    pub scale: Option<Vec3Data>,
    /// axis and angle in degrees
    pub rotate: Option<(Vec3Data, f32)>,
    pub translate: Option<Vec3Data>,
}

impl Transform3Data {
    pub fn resolve(self) -> Result<Transform3> {
        if let Some(scale) = self.scale {
            if scale.iter().any(|component| component.abs() < EPSILON) {
                bail!("scale {:?} is not invertible", scale);
            }
        }
        let maybe_scale = self.scale.map(|v| Transform3::from_scale(Vec3::from(v)));
        let maybe_rotate = self
            .rotate
            .map(|(axis, degrees)| Transform3::from_axis_angle(Vec3::from(axis), degrees.to_radians()));
        let maybe_translate = self
            .translate
            .map(|v| Transform3::from_translation(Vec3::from(v)));
        Ok(Transform3::from_stack(
            maybe_scale,
            maybe_rotate,
            maybe_translate,
        ))
    }
}

#[derive(Serialize, Deserialize, Copy, Clone)]
pub struct MaterialData {
    pub ambient: ColorData,
    pub diffuse: ColorData,
    pub specular: ColorData,
    pub shininess: f32,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material::new(
            RGBColor::from(data.ambient),
            RGBColor::from(data.diffuse),
            RGBColor::from(data.specular),
            data.shininess,
        )
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: Point3Data,
        radius: f32,
    },
    /// Per-vertex normals are optional; absent normals default to the face
    /// normal at every vertex.
    Triangle {
        vertices: [Point3Data; 3],
        normals: Option<[Vec3Data; 3]>,
    },
}

impl From<PrimitiveData> for Primitive {
    fn from(data: PrimitiveData) -> Self {
        match data {
            PrimitiveData::Sphere { center, radius } => {
                Primitive::from(Sphere::new(Point3::from(center), radius))
            }
            PrimitiveData::Triangle { vertices, normals } => {
                let vertices = [
                    Point3::from(vertices[0]),
                    Point3::from(vertices[1]),
                    Point3::from(vertices[2]),
                ];
                let triangle = match normals {
                    Some(normals) => Triangle::new(
                        vertices,
                        [
                            Vec3::from(normals[0]),
                            Vec3::from(normals[1]),
                            Vec3::from(normals[2]),
                        ],
                    ),
                    None => Triangle::with_face_normal(vertices),
                };
                Primitive::from(triangle)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct InstanceData {
    pub primitive: PrimitiveData,
    pub transform: Option<Transform3Data>,
    pub material_identifier: String,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum LightData {
    Point {
        position: Point3Data,
        color: ColorData,
    },
    Directional {
        direction: Vec3Data,
        color: ColorData,
    },
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        match data {
            LightData::Point { position, color } => Light::Point {
                position: Point3::from(position),
                color: RGBColor::from(color),
            },
            LightData::Directional { direction, color } => Light::Directional {
                direction: Vec3::from(direction),
                color: RGBColor::from(color),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone)]
pub struct CameraData {
    pub eye: Point3Data,
    pub look_at: Point3Data,
    pub v_up: Vec3Data,
    /// vertical field of view in degrees
    pub vertical_fov: f32,
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Self {
        Camera::new(
            Point3::from(data.eye),
            Point3::from(data.look_at),
            Vec3::from(data.v_up),
            data.vertical_fov,
        )
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SceneData {
    pub camera: CameraData,
    pub materials: HashMap<String, MaterialData>,
    pub instances: Vec<InstanceData>,
    pub lights: Vec<LightData>,
}

fn load_scene(filepath: PathBuf) -> Result<SceneData> {
    let mut input = String::new();
    info!("loading scene file {}", filepath.to_string_lossy());
    let read_count = File::open(filepath.clone())
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;
    info!("done: {} bytes", read_count);

    let scene: SceneData = toml::from_str(&input).context("failed to parse scene file")?;
    Ok(scene)
}

pub fn construct_scene(scene: SceneData) -> Result<World> {
    let materials: HashMap<String, Material> = scene
        .materials
        .into_iter()
        .map(|(name, data)| (name, Material::from(data)))
        .collect();

    let mut objects = Vec::new();
    for (instance_id, instance) in scene.instances.into_iter().enumerate() {
        let material = *materials
            .get(&instance.material_identifier)
            .ok_or_else(|| {
                anyhow!(
                    "instance {} refers to unknown material {}",
                    instance_id,
                    instance.material_identifier
                )
            })?;
        let transform = instance.transform.map(|data| data.resolve()).transpose()?;
        objects.push(Object::new(
            Primitive::from(instance.primitive),
            transform,
            material,
            instance_id,
        ));
        info!("parsed instance {}", instance_id);
    }

    let lights: Vec<Light> = scene.lights.into_iter().map(Light::from).collect();
    let camera = Camera::from(scene.camera);
    Ok(World::new(objects, lights, camera))
}

pub fn construct_world(scene_file: PathBuf) -> Result<World> {
    let scene = load_scene(scene_file)?;
    construct_scene(scene)
}
