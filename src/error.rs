use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing or drawing the scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not load image {path}: {source}")]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has {channels} color channels, only 3 and 4 are supported")]
    UnsupportedChannelCount { path: PathBuf, channels: u8 },
    #[error("cannot register texture \"{tag}\": all {capacity} texture slots are in use")]
    RegistryFull { tag: String, capacity: usize },
    #[error("no texture registered with tag \"{0}\"")]
    TextureNotFound(String),
    #[error("no material defined with tag \"{0}\"")]
    MaterialNotFound(String),
    #[error("{count} light sources given, the shader supports at most {max}")]
    TooManyLights { count: usize, max: usize },
    #[error("shader error: {0}")]
    Shader(String),
}

/// Errors raised while reading the runtime configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must look like WIDTHxHEIGHT, got \"{value}\"")]
    InvalidWindowSize { var: &'static str, value: String },
    #[error("{var} must be a boolean (0, 1, true, false), got \"{value}\"")]
    InvalidFlag { var: &'static str, value: String },
}
