use std::collections::HashSet;
use std::path::Path;

use glam::Vec4;

use crate::error::SceneError;
use crate::renderer::backend::{MeshProvider, ShaderUniforms, TextureBackend};
use crate::renderer::light::upload_lights;
use crate::renderer::material::MaterialTable;
use crate::renderer::mesh::MeshKind;
use crate::renderer::pipeline::DrawContext;
use crate::renderer::texture::TextureRegistry;
use crate::scene::{Instance, SceneDescription, SubObject, Surface};

/// Drawn in place of a texture that failed to load.
pub const MISSING_TEXTURE_COLOR: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);

/// What happened during [`SceneManager::prepare`].
#[derive(Debug, Default)]
pub struct PrepareReport {
    /// Tags of the textures that were loaded.
    pub loaded: Vec<&'static str>,
    /// Textures that could not be loaded, by tag.
    pub failed: Vec<(&'static str, SceneError)>,
    /// Texture and material references in the instance list that do not
    /// resolve, see [`SceneManager::validate`].
    pub unresolved: Vec<SceneError>,
}

/// Owns the texture registry and material table of one scene, and drives
/// setup, per-frame drawing and teardown through the given backends.
pub struct SceneManager {
    description: SceneDescription,
    textures: TextureRegistry,
    materials: MaterialTable,
}

impl SceneManager {
    pub fn new(description: SceneDescription) -> SceneManager {
        SceneManager {
            description,
            textures: TextureRegistry::new(),
            materials: MaterialTable::new(),
        }
    }

    /// Loads and binds the textures, defines the materials, uploads the
    /// lights and loads every primitive mesh. A texture that fails to load
    /// is logged and reported, but does not stop the setup. Textures and
    /// materials from an earlier `prepare` are released first.
    pub fn prepare<T, U, M>(
        &mut self,
        textures: &mut T,
        uniforms: &mut U,
        meshes: &mut M,
        texture_dir: &Path,
    ) -> Result<PrepareReport, SceneError>
    where
        T: TextureBackend + ?Sized,
        U: ShaderUniforms + ?Sized,
        M: MeshProvider + ?Sized,
    {
        if !self.textures.is_empty() || !self.materials.is_empty() {
            log::debug!("scene prepared again, releasing the previous textures");
            self.destroy(textures);
        }

        let mut report = PrepareReport::default();
        for source in &self.description.textures {
            let path = texture_dir.join(source.file);
            match self.textures.load(textures, &path, source.tag) {
                Ok(_) => report.loaded.push(source.tag),
                Err(err) => {
                    log::warn!("texture \"{}\" not loaded: {err}", source.tag);
                    report.failed.push((source.tag, err));
                }
            }
        }
        self.textures.bind_all(textures);

        for material in &self.description.materials {
            self.materials.define(material.clone());
        }

        upload_lights(uniforms, &self.description.lights)?;

        for kind in MeshKind::ALL {
            meshes.load(kind);
        }

        report.unresolved = self.validate();
        for err in &report.unresolved {
            log::warn!("{err}");
        }
        Ok(report)
    }

    /// Returns one error per distinct texture or material tag that the
    /// instance list uses but that is not available.
    pub fn validate(&self) -> Vec<SceneError> {
        let mut seen = HashSet::new();
        let mut unresolved = Vec::new();
        for instance in &self.description.instances {
            if let Surface::Texture(tag) = instance.surface {
                if self.textures.find_slot(tag).is_none() && seen.insert(("texture", tag)) {
                    unresolved.push(SceneError::TextureNotFound(tag.to_string()));
                }
            }
            if let Some(tag) = instance.material {
                if self.materials.find(tag).is_none() && seen.insert(("material", tag)) {
                    unresolved.push(SceneError::MaterialNotFound(tag.to_string()));
                }
            }
        }
        unresolved
    }

    /// Draws every instance in order.
    pub fn render<U, M>(&self, uniforms: &mut U, meshes: &M)
    where
        U: ShaderUniforms + ?Sized,
        M: MeshProvider + ?Sized,
    {
        let mut ctx = DrawContext::new(uniforms, &self.textures, &self.materials);
        for instance in &self.description.instances {
            draw_instance(&mut ctx, meshes, instance);
        }
    }

    /// Releases every texture. The scene can be prepared again afterwards.
    pub fn destroy<T: TextureBackend + ?Sized>(&mut self, textures: &mut T) {
        self.textures.clear(textures);
        self.materials = MaterialTable::new();
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    pub fn instances_of(&self, part: SubObject) -> impl Iterator<Item = &Instance> {
        self.description
            .instances
            .iter()
            .filter(move |instance| instance.part == part)
    }
}

fn draw_instance<U, M>(ctx: &mut DrawContext<'_, U>, meshes: &M, instance: &Instance)
where
    U: ShaderUniforms + ?Sized,
    M: MeshProvider + ?Sized,
{
    ctx.set_transformations(&instance.transform);
    match instance.surface {
        Surface::Texture(tag) => {
            // Misses were reported by validate() during prepare.
            if ctx.set_texture(tag).is_err() {
                ctx.set_solid_color(MISSING_TEXTURE_COLOR);
            }
        }
        Surface::Color(color) => ctx.set_solid_color(color),
    }
    if let Some(tag) = instance.material {
        // The previous material stays in effect on a miss.
        if let Err(err) = ctx.set_material(tag) {
            log::trace!("{err}, keeping the previous material");
        }
    }
    ctx.set_uv_scale(instance.uv_scale);
    log::trace!("drawing {} {} as {}", instance.part, instance.name, instance.mesh);
    meshes.draw(instance.mesh);
}
