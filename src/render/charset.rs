//! Glyph ramp definitions
//!
//! Ramps are loaded once from the embedded `charsets.toml` and never
//! change afterwards. A renderer receives its [`Charset`] explicitly.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::exif::errors::{ExifError, ExifResult};

/// Name of the ramp used when none is configured
pub const DEFAULT_CHARSET: &str = "density";

/// Ramp used if the embedded definitions cannot be parsed
const FALLBACK_GLYPHS: &str = " ·:-=+*#%@█";

lazy_static! {
    static ref PRESETS: CharsetDefinitions = {
        let content = include_str!("../../charsets.toml");
        CharsetDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse charset definitions: {}", e);
            CharsetDefinitions::default()
        })
    };
}

/// A ramp of glyphs ordered from darkest to brightest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    name: String,
    glyphs: Vec<char>,
}

impl Charset {
    /// Builds a custom ramp; at least one glyph is required
    pub fn new(name: &str, glyphs: &str) -> ExifResult<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(ExifError::GenericError(format!("Charset '{}' has no glyphs", name)));
        }

        Ok(Charset {
            name: name.to_string(),
            glyphs,
        })
    }

    /// Looks up a preset by name
    pub fn preset(name: &str) -> ExifResult<Self> {
        PRESETS
            .ramps
            .get(name)
            .cloned()
            .ok_or_else(|| {
                ExifError::GenericError(format!(
                    "Unknown charset '{}' (available: {})",
                    name,
                    preset_names().join(", ")
                ))
            })
    }

    /// Name of this ramp
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Glyphs from darkest to brightest
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of brightness levels
    pub fn levels(&self) -> usize {
        self.glyphs.len()
    }
}

impl Default for Charset {
    fn default() -> Self {
        PRESETS
            .ramps
            .get(&PRESETS.default_name)
            .cloned()
            .unwrap_or_else(|| Charset {
                name: DEFAULT_CHARSET.to_string(),
                glyphs: FALLBACK_GLYPHS.chars().collect(),
            })
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.name, self.glyphs.iter().collect::<String>())
    }
}

/// Names of all preset ramps, sorted
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.ramps.keys().map(String::as_str).collect()
}

/// Parsed contents of a charset definition file
#[derive(Debug)]
struct CharsetDefinitions {
    default_name: String,
    ramps: BTreeMap<String, Charset>,
}

impl Default for CharsetDefinitions {
    fn default() -> Self {
        let mut ramps = BTreeMap::new();
        ramps.insert(
            DEFAULT_CHARSET.to_string(),
            Charset {
                name: DEFAULT_CHARSET.to_string(),
                glyphs: FALLBACK_GLYPHS.chars().collect(),
            },
        );

        CharsetDefinitions {
            default_name: DEFAULT_CHARSET.to_string(),
            ramps,
        }
    }
}

impl CharsetDefinitions {
    /// Parse ramp definitions from a TOML string
    fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Table = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let default_name = toml_value
            .get("default")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_CHARSET)
            .to_string();

        let mut ramps = BTreeMap::new();
        if let Some(table) = toml_value.get("ramps").and_then(|v| v.as_table()) {
            for (name, glyphs) in table {
                if let Some(glyphs) = glyphs.as_str() {
                    ramps.insert(name.clone(), Charset::new(name, glyphs)?);
                }
            }
        }

        if !ramps.contains_key(&default_name) {
            return Err(ExifError::GenericError(format!(
                "Default charset '{}' is not defined",
                default_name
            )));
        }

        Ok(CharsetDefinitions { default_name, ramps })
    }
}
