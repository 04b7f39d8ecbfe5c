use glam::Vec3;

use crate::renderer::texture::NOT_FOUND;

/// Phong surface parameters uploaded to the shader's `material` struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vec3,
    pub ambient_strength: f32,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub shininess: f32,
}

/// Append-only list of materials, looked up by tag. Tags may repeat; the
/// earliest definition always wins.
#[derive(Debug, Default)]
pub struct MaterialTable {
    materials: Vec<Material>,
}

impl MaterialTable {
    pub fn new() -> MaterialTable {
        MaterialTable::default()
    }

    pub fn define(&mut self, material: Material) {
        if self.position(&material.tag).is_some() {
            log::warn!(
                "material \"{}\" is already defined, the earlier definition stays in effect",
                material.tag
            );
        }
        self.materials.push(material);
    }

    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.materials.iter().position(|material| material.tag == tag)
    }

    pub fn index_or_sentinel(&self, tag: &str) -> i32 {
        self.position(tag).map_or(NOT_FOUND, |index| index as i32)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
