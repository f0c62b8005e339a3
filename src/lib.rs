pub mod io;
pub mod exif;
pub mod transform;
pub mod render;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::Glyphcast;

pub use config::RenderOptions;
pub use exif::{Orientation, OrientationReader};
pub use render::{Charset, TextRenderer};
