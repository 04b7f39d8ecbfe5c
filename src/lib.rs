//! A small OpenGL ES 3.0 scene: a desk tableau built from primitive meshes,
//! textured and lit.
//!
//! - `renderer` holds the texture registry, material table, transform
//!   composition and the per-draw uniform pipeline, plus their GL backends
//! - `scene` holds the declarative scene content and the [`SceneManager`]
//!   that prepares and draws it
//!
//! [`SceneManager`]: scene::manager::SceneManager

pub mod config;
pub mod error;
pub mod renderer;
pub mod scene;
