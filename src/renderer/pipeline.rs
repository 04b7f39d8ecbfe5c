//! Per-draw uniform uploads: model matrix, solid color or texture, UV
//! scale and material.

use glam::{Mat4, Vec2, Vec4};

use crate::error::SceneError;
use crate::renderer::backend::ShaderUniforms;
use crate::renderer::material::MaterialTable;
use crate::renderer::texture::TextureRegistry;
use crate::renderer::transform::Transform;

/// Uniform names shared with the scene shader.
pub mod uniform {
    pub const MODEL: &str = "model";
    pub const VIEW: &str = "view";
    pub const PROJECTION: &str = "projection";
    pub const VIEW_POSITION: &str = "viewPosition";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";
    pub const LIGHT_SOURCES: &str = "lightSources";
}

/// Writes the uniforms for the next draw call into `uniforms`, resolving
/// texture and material tags through the given registry and table.
pub struct DrawContext<'a, U: ShaderUniforms + ?Sized> {
    uniforms: &'a mut U,
    textures: &'a TextureRegistry,
    materials: &'a MaterialTable,
}

impl<'a, U: ShaderUniforms + ?Sized> DrawContext<'a, U> {
    pub fn new(
        uniforms: &'a mut U,
        textures: &'a TextureRegistry,
        materials: &'a MaterialTable,
    ) -> DrawContext<'a, U> {
        DrawContext {
            uniforms,
            textures,
            materials,
        }
    }

    pub fn upload_transform(&mut self, model: Mat4) {
        self.uniforms.set_mat4(uniform::MODEL, model);
    }

    pub fn set_transformations(&mut self, transform: &Transform) {
        self.upload_transform(transform.to_matrix());
    }

    pub fn set_solid_color(&mut self, color: Vec4) {
        self.uniforms.set_bool(uniform::USE_TEXTURE, false);
        self.uniforms.set_vec4(uniform::OBJECT_COLOR, color);
    }

    /// Samples the texture registered under `tag` in the next draw. Returns
    /// the texture unit used. On a miss nothing is written.
    pub fn set_texture(&mut self, tag: &str) -> Result<usize, SceneError> {
        let slot = self
            .textures
            .find_slot(tag)
            .ok_or_else(|| SceneError::TextureNotFound(tag.to_string()))?;
        self.uniforms.set_bool(uniform::USE_TEXTURE, true);
        self.uniforms.set_sampler(uniform::OBJECT_TEXTURE, slot as u32);
        Ok(slot)
    }

    pub fn set_uv_scale(&mut self, scale: Vec2) {
        self.uniforms.set_vec2(uniform::UV_SCALE, scale);
    }

    /// Uploads all fields of the material defined under `tag`. On a miss
    /// nothing is written and the previous material stays in effect.
    pub fn set_material(&mut self, tag: &str) -> Result<(), SceneError> {
        let material = self
            .materials
            .find(tag)
            .ok_or_else(|| SceneError::MaterialNotFound(tag.to_string()))?;
        let uniforms = &mut *self.uniforms;
        uniforms.set_vec3(uniform::MATERIAL_AMBIENT_COLOR, material.ambient_color);
        uniforms.set_float(uniform::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
        uniforms.set_vec3(uniform::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
        uniforms.set_vec3(uniform::MATERIAL_SPECULAR_COLOR, material.specular_color);
        uniforms.set_float(uniform::MATERIAL_SHININESS, material.shininess);
        Ok(())
    }
}
