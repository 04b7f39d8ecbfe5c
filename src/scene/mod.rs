//! Declarative scene content: which textures to load, which materials and
//! lights to define, and the ordered list of mesh instances to draw.

use std::fmt;

use glam::{Vec2, Vec4};

use crate::renderer::light::LightSource;
use crate::renderer::material::Material;
use crate::renderer::mesh::MeshKind;
use crate::renderer::transform::Transform;

pub mod manager;
pub mod tableau;

/// The logical object an instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubObject {
    Room,
    Dolphin,
    Laptop,
    Book,
    Headphones,
}

impl fmt::Display for SubObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubObject::Room => "room",
            SubObject::Dolphin => "dolphin",
            SubObject::Laptop => "laptop",
            SubObject::Book => "book",
            SubObject::Headphones => "headphones",
        };
        f.write_str(name)
    }
}

/// An image file to load at setup, registered under `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSource {
    pub tag: &'static str,
    /// Relative to the configured texture directory.
    pub file: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    Texture(&'static str),
    Color(Vec4),
}

/// One draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance {
    pub part: SubObject,
    pub name: &'static str,
    pub mesh: MeshKind,
    pub transform: Transform,
    pub surface: Surface,
    /// `None` keeps the material uploaded by the previous draw.
    pub material: Option<&'static str>,
    pub uv_scale: Vec2,
}

#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    pub instances: Vec<Instance>,
}
