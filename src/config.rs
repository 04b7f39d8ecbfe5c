//! Runtime configuration, read from environment variables.

use std::path::PathBuf;

use crate::error::ConfigError;

pub const TEXTURE_DIR_VAR: &str = "TABLEAU_TEXTURE_DIR";
pub const WINDOW_SIZE_VAR: &str = "TABLEAU_WINDOW_SIZE";
pub const VSYNC_VAR: &str = "TABLEAU_VSYNC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the scene's texture file names are resolved against.
    pub texture_dir: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            texture_dir: PathBuf::from("assets/textures"),
            window_width: 948,
            window_height: 533,
            vsync: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from the given variable lookup, falling back to the
    /// defaults for unset variables. Set but malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        if let Some(dir) = lookup(TEXTURE_DIR_VAR) {
            config.texture_dir = PathBuf::from(dir);
        }
        if let Some(size) = lookup(WINDOW_SIZE_VAR) {
            let (width, height) = parse_window_size(&size).ok_or(ConfigError::InvalidWindowSize {
                var: WINDOW_SIZE_VAR,
                value: size.clone(),
            })?;
            config.window_width = width;
            config.window_height = height;
        }
        if let Some(flag) = lookup(VSYNC_VAR) {
            config.vsync = parse_flag(&flag).ok_or(ConfigError::InvalidFlag {
                var: VSYNC_VAR,
                value: flag.clone(),
            })?;
        }
        Ok(config)
    }
}

fn parse_window_size(value: &str) -> Option<(u32, u32)> {
    let (width, height) = value.trim().split_once(['x', 'X'])?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
