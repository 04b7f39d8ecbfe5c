//! Recording stand-ins for the GL backends, used by the unit tests.

use std::cell::RefCell;

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::SceneError;
use crate::renderer::backend::{MeshProvider, ShaderUniforms, TextureBackend, TextureHandle};
use crate::renderer::mesh::MeshKind;
use crate::renderer::texture::DecodedImage;

#[derive(Debug, Default)]
pub struct FakeTextures {
    pub created: Vec<DecodedImage>,
    created_handles: Vec<TextureHandle>,
    pub bound: Vec<(u32, TextureHandle)>,
    pub deleted: Vec<TextureHandle>,
}

impl FakeTextures {
    pub fn handles(&self) -> Vec<TextureHandle> {
        self.created_handles.clone()
    }
}

impl TextureBackend for FakeTextures {
    fn create_texture(&mut self, image: &DecodedImage) -> Result<TextureHandle, SceneError> {
        // Start somewhere other than zero so handles and slots never coincide.
        let handle = TextureHandle(100 + self.created.len() as u32);
        self.created.push(image.clone());
        self.created_handles.push(handle);
        Ok(handle)
    }

    fn bind_to_unit(&mut self, unit: u32, handle: TextureHandle) {
        self.bound.push((unit, handle));
    }

    fn delete_texture(&mut self, handle: TextureHandle) {
        self.deleted.push(handle);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec4(Vec4),
    Vec3(Vec3),
    Vec2(Vec2),
    Float(f32),
    Bool(bool),
    Sampler(u32),
}

#[derive(Debug, Default)]
pub struct RecordingUniforms {
    pub writes: Vec<(String, UniformValue)>,
}

impl RecordingUniforms {
    /// The most recent value written to the named uniform.
    pub fn last(&self, name: &str) -> Option<&UniformValue> {
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| written == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.writes.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.writes.push((name.to_string(), value));
    }
}

impl ShaderUniforms for RecordingUniforms {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.record(name, UniformValue::Mat4(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        self.record(name, UniformValue::Sampler(unit));
    }
}

#[derive(Debug, Default)]
pub struct RecordingMeshes {
    pub loaded: Vec<MeshKind>,
    pub drawn: RefCell<Vec<MeshKind>>,
}

impl MeshProvider for RecordingMeshes {
    fn load(&mut self, kind: MeshKind) {
        self.loaded.push(kind);
    }

    fn draw(&self, kind: MeshKind) {
        self.drawn.borrow_mut().push(kind);
    }
}
