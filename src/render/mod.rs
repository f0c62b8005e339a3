//! Text rendering of pixel grids
//!
//! Maps each pixel of an already oriented and resized grid to a glyph from
//! a brightness ramp, optionally wrapped in true-color terminal escapes.

pub mod charset;
pub mod luminance;
pub mod printer;

pub use charset::{preset_names, Charset, DEFAULT_CHARSET};
pub use printer::TextRenderer;
