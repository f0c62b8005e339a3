//! Render configuration
//!
//! Options can come from a TOML file and are then overridden by
//! command-line flags. Unset values keep their defaults.

use std::fs;

use log::debug;

use crate::exif::errors::{ExifError, ExifResult};
use crate::render::Charset;

/// Default output width in glyphs
pub const DEFAULT_WIDTH: u32 = 80;

/// Default output height in rows
pub const DEFAULT_HEIGHT: u32 = 40;

/// Largest accepted width or height, in glyphs
pub const MAX_DIMENSION: u32 = 4096;

/// Resolved options for one rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output width in glyphs
    pub width: u32,
    /// Output height in rows
    pub height: u32,
    /// Emit true-color escapes
    pub color: bool,
    /// Invert the brightness ramp
    pub invert: bool,
    /// Correct the image using its Exif orientation
    pub orient: bool,
    /// Glyph ramp
    pub charset: Charset,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: false,
            invert: false,
            orient: true,
            charset: Charset::default(),
        }
    }
}

impl RenderOptions {
    /// Reads options from a TOML file
    pub fn load(path: &str) -> ExifResult<Self> {
        debug!("Loading render configuration from {}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| ExifError::GenericError(format!("Failed to read config '{}': {}", path, e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses options from TOML text
    ///
    /// Recognised keys: `width`, `height`, `color`, `invert`, `orient`,
    /// `charset` (preset name) and `glyphs` (custom ramp, wins over
    /// `charset`).
    pub fn from_toml_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Table = content
            .parse()
            .map_err(|e| ExifError::GenericError(format!("Failed to parse TOML: {}", e)))?;

        let mut options = RenderOptions::default();

        if let Some(width) = dimension(&toml_value, "width")? {
            options.width = width;
        }
        if let Some(height) = dimension(&toml_value, "height")? {
            options.height = height;
        }
        if let Some(color) = flag(&toml_value, "color")? {
            options.color = color;
        }
        if let Some(invert) = flag(&toml_value, "invert")? {
            options.invert = invert;
        }
        if let Some(orient) = flag(&toml_value, "orient")? {
            options.orient = orient;
        }

        if let Some(glyphs) = toml_value.get("glyphs") {
            let glyphs = glyphs
                .as_str()
                .ok_or_else(|| ExifError::GenericError("'glyphs' must be a string".to_string()))?;
            options.charset = Charset::new("custom", glyphs)?;
        } else if let Some(name) = toml_value.get("charset") {
            let name = name
                .as_str()
                .ok_or_else(|| ExifError::GenericError("'charset' must be a string".to_string()))?;
            options.charset = Charset::preset(name)?;
        }

        Ok(options)
    }
}

/// Parses a dimension value in 1..=MAX_DIMENSION
pub fn parse_dimension(name: &str, raw: &str) -> ExifResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(value) if (1..=MAX_DIMENSION).contains(&value) => Ok(value),
        _ => Err(ExifError::GenericError(format!(
            "Invalid {}: '{}' (must be between 1 and {})",
            name, raw, MAX_DIMENSION
        ))),
    }
}

fn dimension(value: &toml::Table, key: &str) -> ExifResult<Option<u32>> {
    match value.get(key) {
        None => Ok(None),
        Some(raw) => raw
            .as_integer()
            .filter(|&n| n > 0 && n <= i64::from(MAX_DIMENSION))
            .map(|n| Some(n as u32))
            .ok_or_else(|| {
                ExifError::GenericError(format!("'{}' must be between 1 and {}", key, MAX_DIMENSION))
            }),
    }
}

fn flag(value: &toml::Table, key: &str) -> ExifResult<Option<bool>> {
    match value.get(key) {
        None => Ok(None),
        Some(raw) => raw
            .as_bool()
            .map(Some)
            .ok_or_else(|| ExifError::GenericError(format!("'{}' must be true or false", key))),
    }
}
