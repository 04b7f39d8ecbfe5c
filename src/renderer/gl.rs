//! Generated OpenGL ES 3.0 bindings and the small helpers built on top of
//! them.

#![allow(clippy::all, non_upper_case_globals, unused)]

use std::ffi::{c_void, CString};

use crate::error::SceneError;

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

/// Calls the given GL function, and in debug builds, checks `glGetError`
/// afterwards and panics with the error name and call site.
macro_rules! call {
    ($expr:expr) => {{
        let result = unsafe { $expr };
        if cfg!(debug_assertions) {
            let error = unsafe { $crate::renderer::gl::GetError() };
            if error != $crate::renderer::gl::NO_ERROR {
                panic!(
                    "OpenGL error {} at {}:{}:{}",
                    $crate::renderer::gl::error_name(error),
                    file!(),
                    line!(),
                    column!(),
                );
            }
        }
        result
    }};
}
pub(crate) use call;

pub fn error_name(error: types::GLenum) -> String {
    match error {
        INVALID_ENUM => "INVALID_ENUM".to_string(),
        INVALID_VALUE => "INVALID_VALUE".to_string(),
        INVALID_OPERATION => "INVALID_OPERATION".to_string(),
        OUT_OF_MEMORY => "OUT_OF_MEMORY".to_string(),
        INVALID_FRAMEBUFFER_OPERATION => "INVALID_FRAMEBUFFER_OPERATION".to_string(),
        _ => format!("{error}"),
    }
}

pub fn buffer_data_f32(target: types::GLenum, data: &[f32], usage: types::GLenum) {
    let data: &[u8] = bytemuck::cast_slice(data);
    call!(BufferData(
        target,
        data.len() as isize,
        data.as_ptr() as *const c_void,
        usage,
    ));
}

pub fn create_shader(shader_type: types::GLenum, source: &str) -> Result<types::GLuint, SceneError> {
    let shader = call!(CreateShader(shader_type));
    let sources = [source.as_ptr() as *const types::GLchar];
    let source_lens = [source.len() as types::GLint];
    call!(ShaderSource(
        shader,
        1,
        sources.as_ptr(),
        source_lens.as_ptr(),
    ));
    call!(CompileShader(shader));
    let mut compile_status = 0;
    call!(GetShaderiv(shader, COMPILE_STATUS, &mut compile_status));
    if compile_status == FALSE as i32 {
        let mut info_log = [0u8; 4096];
        let mut length = 0;
        call!(GetShaderInfoLog(
            shader,
            info_log.len() as i32,
            &mut length,
            info_log.as_mut_ptr() as *mut types::GLchar,
        ));
        call!(DeleteShader(shader));
        let info_log = String::from_utf8_lossy(&info_log[..length.max(0) as usize]);
        let kind = if shader_type == VERTEX_SHADER {
            "vertex"
        } else {
            "fragment"
        };
        return Err(SceneError::Shader(format!(
            "compiling {kind} shader failed: {info_log}"
        )));
    }
    Ok(shader)
}

pub fn create_program(shaders: &[types::GLuint]) -> Result<types::GLuint, SceneError> {
    let program = call!(CreateProgram());
    for &shader in shaders {
        call!(AttachShader(program, shader));
    }
    call!(LinkProgram(program));
    let mut link_status = 0;
    call!(GetProgramiv(program, LINK_STATUS, &mut link_status));
    if link_status == FALSE as i32 {
        let mut info_log = [0u8; 4096];
        let mut length = 0;
        call!(GetProgramInfoLog(
            program,
            info_log.len() as i32,
            &mut length,
            info_log.as_mut_ptr() as *mut types::GLchar,
        ));
        call!(DeleteProgram(program));
        let info_log = String::from_utf8_lossy(&info_log[..length.max(0) as usize]);
        return Err(SceneError::Shader(format!(
            "linking shader program failed: {info_log}"
        )));
    }
    Ok(program)
}

/// Returns the location of the named uniform, or None if the program has no
/// active uniform by that name (e.g. the compiler optimized it out).
pub fn get_uniform_location(program: types::GLuint, name: &str) -> Option<types::GLint> {
    let name = CString::new(name).ok()?;
    let location = call!(GetUniformLocation(program, name.as_ptr()));
    (location != -1).then_some(location)
}
