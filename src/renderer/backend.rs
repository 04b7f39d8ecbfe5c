//! The seams between the scene logic and the graphics API.
//!
//! Everything above these traits is plain data and can run without a GL
//! context; the GL implementations live in [`super::gl_texture`],
//! [`super::program`] and [`super::proxy_mesh`].

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::SceneError;
use crate::renderer::mesh::MeshKind;
use crate::renderer::texture::DecodedImage;

/// An opaque texture object handle as handed out by the graphics API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

pub trait TextureBackend {
    /// Uploads the image as a 2D texture with repeat wrapping, linear
    /// filtering and generated mipmaps.
    fn create_texture(&mut self, image: &DecodedImage) -> Result<TextureHandle, SceneError>;
    /// Binds the texture to the given texture unit.
    fn bind_to_unit(&mut self, unit: u32, handle: TextureHandle);
    fn delete_texture(&mut self, handle: TextureHandle);
}

/// Named uniform setters of the active shader program.
///
/// Writes are applied in call order and persist until overwritten, so every
/// draw depends on all uniform writes that preceded it.
pub trait ShaderUniforms {
    fn set_mat4(&mut self, name: &str, value: Mat4);
    fn set_vec4(&mut self, name: &str, value: Vec4);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_vec2(&mut self, name: &str, value: Vec2);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_sampler(&mut self, name: &str, unit: u32);
}

pub trait MeshProvider {
    /// Builds the GPU buffers for the primitive. Called once per kind.
    fn load(&mut self, kind: MeshKind);
    fn draw(&self, kind: MeshKind);
}
