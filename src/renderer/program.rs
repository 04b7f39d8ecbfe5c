use std::collections::HashMap;

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::error::SceneError;
use crate::renderer::backend::ShaderUniforms;
use crate::renderer::gl;

/// The vertex attribute location of the vertex positions.
pub const ATTR_LOC_POSITION: gl::types::GLuint = 0;
/// The vertex attribute location of the vertex normals.
pub const ATTR_LOC_NORMAL: gl::types::GLuint = 1;
/// The vertex attribute location of the texture coordinates.
pub const ATTR_LOC_TEXCOORD: gl::types::GLuint = 2;

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 POSITION;
layout(location = 1) in vec3 NORMAL;
layout(location = 2) in vec2 TEXCOORD;
out vec3 fragment_position;
out vec3 fragment_normal;
out vec2 fragment_uv;
uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;
void main() {
    vec4 world_position = model * vec4(POSITION, 1.0);
    fragment_position = world_position.xyz;
    fragment_normal = mat3(transpose(inverse(model))) * NORMAL;
    fragment_uv = TEXCOORD;
    gl_Position = projection * view * world_position;
}
"#;
const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
#define MAX_LIGHTS 4
struct Material {
    vec3 ambientColor;
    float ambientStrength;
    vec3 diffuseColor;
    vec3 specularColor;
    float shininess;
};
struct LightSource {
    vec3 position;
    vec3 ambientColor;
    vec3 diffuseColor;
    vec3 specularColor;
    float focalStrength;
    float specularIntensity;
};
in vec3 fragment_position;
in vec3 fragment_normal;
in vec2 fragment_uv;
out vec4 FRAG_COLOR;
uniform bool bUseTexture;
uniform bool bUseLighting;
uniform vec4 objectColor;
uniform sampler2D objectTexture;
uniform vec2 UVscale;
uniform vec3 viewPosition;
uniform Material material;
uniform LightSource lightSources[MAX_LIGHTS];

vec3 light_contribution(LightSource light, vec3 normal, vec3 view_direction) {
    vec3 light_direction = normalize(light.position - fragment_position);
    vec3 ambient = light.ambientColor + material.ambientColor * material.ambientStrength;
    float diffuse_impact = max(dot(normal, light_direction), 0.0);
    vec3 diffuse = diffuse_impact * (light.diffuseColor + material.diffuseColor);
    vec3 reflect_direction = reflect(-light_direction, normal);
    float highlight = pow(max(dot(view_direction, reflect_direction), 0.0), light.focalStrength);
    vec3 specular = light.specularIntensity * highlight
        * (light.specularColor + material.specularColor * material.shininess);
    return ambient + diffuse + specular;
}

void main() {
    vec4 base_color = objectColor;
    if (bUseTexture) {
        base_color = texture(objectTexture, fragment_uv * UVscale);
        // The texture files are sRGB-encoded, lighting happens in linear space.
        base_color.rgb = pow(base_color.rgb, vec3(2.2));
    }
    vec3 output_linear_color = base_color.rgb;
    if (bUseLighting) {
        vec3 normal = normalize(fragment_normal);
        vec3 view_direction = normalize(viewPosition - fragment_position);
        vec3 lighting = vec3(0.0);
        for (int i = 0; i < MAX_LIGHTS; i++) {
            lighting += light_contribution(lightSources[i], normal, view_direction);
        }
        output_linear_color *= lighting;
    }
    // The framebuffer is not SRGB, so we transform the linear color to close-enough-to-srgb.
    FRAG_COLOR = vec4(pow(output_linear_color, vec3(1.0 / 2.2)), base_color.a);
}
"#;

/// The compiled scene shader. Uniform writes go to the named uniforms of
/// this program, which must be the one in use.
pub struct ShaderProgram {
    pub program: gl::types::GLuint,
    locations: HashMap<String, Option<gl::types::GLint>>,
}

impl ShaderProgram {
    /// Compiles and links the scene shader and makes it the active program.
    pub fn compile() -> Result<ShaderProgram, SceneError> {
        let vertex_shader = gl::create_shader(gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment_shader = match gl::create_shader(gl::FRAGMENT_SHADER, FRAGMENT_SHADER) {
            Ok(shader) => shader,
            Err(err) => {
                gl::call!(gl::DeleteShader(vertex_shader));
                return Err(err);
            }
        };
        let program = gl::create_program(&[vertex_shader, fragment_shader]);
        gl::call!(gl::DeleteShader(vertex_shader));
        gl::call!(gl::DeleteShader(fragment_shader));
        let program = program?;
        gl::call!(gl::UseProgram(program));
        Ok(ShaderProgram {
            program,
            locations: HashMap::new(),
        })
    }

    pub fn use_program(&self) {
        gl::call!(gl::UseProgram(self.program));
    }

    fn location(&mut self, name: &str) -> Option<gl::types::GLint> {
        if let Some(&location) = self.locations.get(name) {
            return location;
        }
        let location = gl::get_uniform_location(self.program, name);
        if location.is_none() {
            log::debug!("uniform \"{name}\" is not active in the scene shader, writes to it are skipped");
        }
        self.locations.insert(name.to_string(), location);
        location
    }
}

impl ShaderUniforms for ShaderProgram {
    fn set_mat4(&mut self, name: &str, value: Mat4) {
        if let Some(location) = self.location(name) {
            let columns = value.to_cols_array();
            gl::call!(gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr()));
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform4f(location, value.x, value.y, value.z, value.w));
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform3f(location, value.x, value.y, value.z));
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform2f(location, value.x, value.y));
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform1f(location, value));
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform1i(location, value as i32));
        }
    }

    fn set_sampler(&mut self, name: &str, unit: u32) {
        if let Some(location) = self.location(name) {
            gl::call!(gl::Uniform1i(location, unit as i32));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        gl::call!(gl::DeleteProgram(self.program));
    }
}
