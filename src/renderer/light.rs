use glam::Vec3;

use crate::error::SceneError;
use crate::renderer::backend::ShaderUniforms;
use crate::renderer::pipeline::uniform;

/// The size of the shader's `lightSources` array.
pub const MAX_LIGHTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub position: Vec3,
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    /// A light that contributes nothing, used to fill unused array slots.
    pub const OFF: LightSource = LightSource {
        position: Vec3::ZERO,
        ambient_color: Vec3::ZERO,
        diffuse_color: Vec3::ZERO,
        specular_color: Vec3::ZERO,
        focal_strength: 1.0,
        specular_intensity: 0.0,
    };
}

/// Uploads `lights` into `lightSources[0..]`, turns the remaining slots off
/// and enables lighting if any light was given.
pub fn upload_lights<U: ShaderUniforms + ?Sized>(
    uniforms: &mut U,
    lights: &[LightSource],
) -> Result<(), SceneError> {
    if lights.len() > MAX_LIGHTS {
        return Err(SceneError::TooManyLights {
            count: lights.len(),
            max: MAX_LIGHTS,
        });
    }
    let unused = std::iter::repeat(&LightSource::OFF).take(MAX_LIGHTS - lights.len());
    for (i, light) in lights.iter().chain(unused).enumerate() {
        let field = |name: &str| format!("{}[{i}].{name}", uniform::LIGHT_SOURCES);
        uniforms.set_vec3(&field("position"), light.position);
        uniforms.set_vec3(&field("ambientColor"), light.ambient_color);
        uniforms.set_vec3(&field("diffuseColor"), light.diffuse_color);
        uniforms.set_vec3(&field("specularColor"), light.specular_color);
        uniforms.set_float(&field("focalStrength"), light.focal_strength);
        uniforms.set_float(&field("specularIntensity"), light.specular_intensity);
    }
    uniforms.set_bool(uniform::USE_LIGHTING, !lights.is_empty());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{RecordingUniforms, UniformValue};

    fn key_light() -> LightSource {
        LightSource {
            position: Vec3::new(0.0, 3.0, 20.0),
            ambient_color: Vec3::splat(0.1),
            diffuse_color: Vec3::splat(0.2),
            specular_color: Vec3::ZERO,
            focal_strength: 12.0,
            specular_intensity: 0.2,
        }
    }

    #[test]
    fn uploads_every_field_and_fills_unused_slots() {
        let mut uniforms = RecordingUniforms::default();
        upload_lights(&mut uniforms, &[key_light()]).unwrap();

        assert_eq!(
            uniforms.last("lightSources[0].position"),
            Some(&UniformValue::Vec3(Vec3::new(0.0, 3.0, 20.0)))
        );
        assert_eq!(
            uniforms.last("lightSources[0].focalStrength"),
            Some(&UniformValue::Float(12.0))
        );
        assert_eq!(
            uniforms.last("lightSources[3].diffuseColor"),
            Some(&UniformValue::Vec3(Vec3::ZERO))
        );
        assert_eq!(uniforms.writes.len(), MAX_LIGHTS * 6 + 1);
        assert_eq!(
            uniforms.last(uniform::USE_LIGHTING),
            Some(&UniformValue::Bool(true))
        );
    }

    #[test]
    fn no_lights_disables_lighting() {
        let mut uniforms = RecordingUniforms::default();
        upload_lights(&mut uniforms, &[]).unwrap();
        assert_eq!(
            uniforms.last(uniform::USE_LIGHTING),
            Some(&UniformValue::Bool(false))
        );
    }

    #[test]
    fn a_full_set_of_lights_is_accepted() {
        let mut uniforms = RecordingUniforms::default();
        let mut lights = [key_light(); MAX_LIGHTS];
        lights[MAX_LIGHTS - 1].focal_strength = 32.0;
        upload_lights(&mut uniforms, &lights).unwrap();

        assert_eq!(uniforms.writes.len(), MAX_LIGHTS * 6 + 1);
        assert_eq!(
            uniforms.last("lightSources[3].focalStrength"),
            Some(&UniformValue::Float(32.0))
        );
        assert_eq!(
            uniforms.last(uniform::USE_LIGHTING),
            Some(&UniformValue::Bool(true))
        );
    }

    #[test]
    fn too_many_lights_uploads_nothing() {
        let mut uniforms = RecordingUniforms::default();
        let lights = [key_light(); MAX_LIGHTS + 1];
        let err = upload_lights(&mut uniforms, &lights).unwrap_err();
        assert!(matches!(err, SceneError::TooManyLights { count: 5, max: 4 }));
        assert!(uniforms.writes.is_empty());
    }
}
