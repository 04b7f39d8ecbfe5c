use std::collections::HashSet;
use std::ffi::c_void;
use std::mem;

use glam::Vec3;

use crate::renderer::backend::MeshProvider;
use crate::renderer::gl;
use crate::renderer::mesh::MeshKind;
use crate::renderer::program::{ATTR_LOC_NORMAL, ATTR_LOC_POSITION, ATTR_LOC_TEXCOORD};

/// Position, normal and texture coordinate.
const FLOATS_PER_VERTEX: usize = 8;

/// Stands in for the primitive geometry: every [`MeshKind`] is drawn as a
/// unit cube centered on the origin, which is enough to see where each
/// instance ends up and how it is textured and lit.
pub struct ProxyMeshes {
    vao: gl::types::GLuint,
    vbo: gl::types::GLuint,
    vertex_count: i32,
    loaded: HashSet<MeshKind>,
}

impl ProxyMeshes {
    pub fn new() -> ProxyMeshes {
        let data = unit_cube();
        let mut vao = 0;
        let mut vbo = 0;
        gl::call!(gl::GenVertexArrays(1, &mut vao));
        gl::call!(gl::GenBuffers(1, &mut vbo));
        gl::call!(gl::BindVertexArray(vao));
        gl::call!(gl::BindBuffer(gl::ARRAY_BUFFER, vbo));
        gl::buffer_data_f32(gl::ARRAY_BUFFER, &data, gl::STATIC_DRAW);
        let stride = (FLOATS_PER_VERTEX * mem::size_of::<f32>()) as i32;
        let attributes = [
            (ATTR_LOC_POSITION, 3, 0),
            (ATTR_LOC_NORMAL, 3, 3),
            (ATTR_LOC_TEXCOORD, 2, 6),
        ];
        for (location, size, offset) in attributes {
            gl::call!(gl::EnableVertexAttribArray(location));
            gl::call!(gl::VertexAttribPointer(
                location,
                size,
                gl::FLOAT,
                gl::FALSE,
                stride,
                (offset * mem::size_of::<f32>()) as *const c_void,
            ));
        }
        gl::call!(gl::BindVertexArray(0));
        ProxyMeshes {
            vao,
            vbo,
            vertex_count: (data.len() / FLOATS_PER_VERTEX) as i32,
            loaded: HashSet::new(),
        }
    }
}

impl MeshProvider for ProxyMeshes {
    fn load(&mut self, kind: MeshKind) {
        if self.loaded.insert(kind) {
            log::debug!("drawing {kind} meshes as unit cube proxies");
        }
    }

    fn draw(&self, kind: MeshKind) {
        debug_assert!(self.loaded.contains(&kind), "{kind} mesh drawn before it was loaded");
        gl::call!(gl::BindVertexArray(self.vao));
        gl::call!(gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count));
    }
}

impl Drop for ProxyMeshes {
    fn drop(&mut self) {
        gl::call!(gl::DeleteVertexArrays(1, &self.vao));
        gl::call!(gl::DeleteBuffers(1, &self.vbo));
    }
}

/// Two counter-clockwise triangles per face.
fn unit_cube() -> Vec<f32> {
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let mut data = Vec::with_capacity(faces.len() * corners.len() * FLOATS_PER_VERTEX);
    for (normal, right, up) in faces {
        for (u, v) in corners {
            let position = (normal + right * (u * 2.0 - 1.0) + up * (v * 2.0 - 1.0)) * 0.5;
            data.extend_from_slice(&position.to_array());
            data.extend_from_slice(&normal.to_array());
            data.extend_from_slice(&[u, v]);
        }
    }
    data
}
