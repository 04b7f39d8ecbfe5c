use std::ffi::c_void;

use crate::error::SceneError;
use crate::renderer::backend::{TextureBackend, TextureHandle};
use crate::renderer::gl;
use crate::renderer::texture::{DecodedImage, PixelFormat};

/// Creates and binds GL texture objects. Needs a current GL context.
pub struct GlTextures;

impl TextureBackend for GlTextures {
    fn create_texture(&mut self, image: &DecodedImage) -> Result<TextureHandle, SceneError> {
        let (internal_format, format) = match image.format {
            PixelFormat::Rgb8 => (gl::RGB8, gl::RGB),
            PixelFormat::Rgba8 => (gl::RGBA8, gl::RGBA),
        };
        let mut texture = 0;
        gl::call!(gl::GenTextures(1, &mut texture));
        gl::call!(gl::BindTexture(gl::TEXTURE_2D, texture));
        gl::call!(gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32));
        gl::call!(gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32));
        gl::call!(gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR as i32));
        gl::call!(gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32));
        // RGB rows are not necessarily 4-byte aligned.
        gl::call!(gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1));
        gl::call!(gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            internal_format as i32,
            image.width as i32,
            image.height as i32,
            0,
            format,
            gl::UNSIGNED_BYTE,
            image.pixels.as_ptr() as *const c_void,
        ));
        gl::call!(gl::GenerateMipmap(gl::TEXTURE_2D));
        gl::call!(gl::BindTexture(gl::TEXTURE_2D, 0));
        Ok(TextureHandle(texture))
    }

    fn bind_to_unit(&mut self, unit: u32, handle: TextureHandle) {
        gl::call!(gl::ActiveTexture(gl::TEXTURE0 + unit));
        gl::call!(gl::BindTexture(gl::TEXTURE_2D, handle.0));
    }

    fn delete_texture(&mut self, handle: TextureHandle) {
        gl::call!(gl::DeleteTextures(1, &handle.0));
    }
}
