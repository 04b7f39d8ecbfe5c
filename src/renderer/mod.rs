use std::ffi::c_void;

use glam::{Mat4, Vec3};

use crate::config::Config;
use crate::error::SceneError;
use crate::scene::manager::SceneManager;
use crate::scene::tableau;

pub mod backend;
pub(crate) mod gl;
pub mod gl_texture;
pub mod light;
pub mod material;
pub mod mesh;
pub mod pipeline;
pub mod program;
pub mod proxy_mesh;
#[cfg(test)]
pub(crate) mod testing;
pub mod texture;
pub mod transform;

use backend::ShaderUniforms;
use gl_texture::GlTextures;
use pipeline::uniform;
use program::ShaderProgram;
use proxy_mesh::ProxyMeshes;

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 8.0, 30.0);
const CAMERA_TARGET: Vec3 = Vec3::new(2.0, 0.0, 5.0);
const FIELD_OF_VIEW_DEGREES: f32 = 45.0;

pub struct Renderer {
    program: ShaderProgram,
    textures: GlTextures,
    meshes: ProxyMeshes,
    scene: SceneManager,
    aspect_ratio: f32,
}

impl Renderer {
    /// Sets up GL state and prepares the tableau scene. Requires a current
    /// GL ES 3.0 context; `load_proc` resolves GL function pointers.
    pub fn new(
        load_proc: impl FnMut(&'static str) -> *const c_void,
        drawable_size: (u32, u32),
        config: &Config,
    ) -> Result<Renderer, SceneError> {
        gl::load_with(load_proc);
        let (w, h) = drawable_size;
        gl::call!(gl::Viewport(0, 0, w as i32, h as i32));
        gl::call!(gl::Enable(gl::DEPTH_TEST));

        let mut program = ShaderProgram::compile()?;
        let mut textures = GlTextures;
        let mut meshes = ProxyMeshes::new();
        let mut scene = SceneManager::new(tableau::description());
        let report = scene.prepare(&mut textures, &mut program, &mut meshes, &config.texture_dir)?;
        log::info!(
            "scene prepared: {} textures loaded, {} failed, {} unresolved references",
            report.loaded.len(),
            report.failed.len(),
            report.unresolved.len(),
        );

        Ok(Renderer {
            program,
            textures,
            meshes,
            scene,
            aspect_ratio: w as f32 / h.max(1) as f32,
        })
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        gl::call!(gl::Viewport(0, 0, width, height));
        self.aspect_ratio = width as f32 / height.max(1) as f32;
    }

    pub fn render(&mut self) {
        gl::call!(gl::ClearColor(0.0, 0.0, 0.0, 1.0));
        gl::call!(gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT));
        self.program.use_program();

        let view = Mat4::look_at_rh(CAMERA_POSITION, CAMERA_TARGET, Vec3::Y);
        let projection = Mat4::perspective_rh_gl(
            FIELD_OF_VIEW_DEGREES.to_radians(),
            self.aspect_ratio,
            0.1,
            100.0,
        );
        self.program.set_mat4(uniform::VIEW, view);
        self.program.set_mat4(uniform::PROJECTION, projection);
        self.program.set_vec3(uniform::VIEW_POSITION, CAMERA_POSITION);

        self.scene.render(&mut self.program, &self.meshes);
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.scene.destroy(&mut self.textures);
    }
}
