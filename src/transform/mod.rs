//! Pixel transform layer
//!
//! Geometric remaps over in-memory pixel grids: nearest-neighbor resizing,
//! fixed-angle rotations, mirrors and Exif orientation correction. Every
//! operation reads through [`image::GenericImageView`] and returns a newly
//! allocated grid; sources are never modified.

pub mod resize;
pub mod rotation;
pub mod flip;
pub mod orient;

use image::{ImageBuffer, Pixel};

/// An owned pixel grid with (0,0) at the top-left
pub type Grid<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

pub use flip::{flip_horizontal, flip_vertical};
pub use orient::apply_orientation;
pub use resize::resize_nearest;
pub use rotation::{rotate180, rotate270, rotate90};
