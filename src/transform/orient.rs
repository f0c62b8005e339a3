//! Orientation correction
//!
//! Dispatches an Exif orientation to the transform that makes the stored
//! pixels display upright.

use image::{GenericImageView, ImageBuffer};
use log::debug;

use crate::exif::Orientation;
use crate::transform::flip::{flip_horizontal, flip_vertical};
use crate::transform::rotation::{rotate180, rotate270, rotate90};
use crate::transform::Grid;

/// Returns an upright copy of `image` for the given orientation
pub fn apply_orientation<I>(image: &I, orientation: Orientation) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    debug!("Applying orientation {}", orientation);

    match orientation {
        Orientation::Normal => copy(image),
        Orientation::FlipHorizontal => flip_horizontal(image),
        Orientation::Rotate180 => rotate180(image),
        Orientation::FlipVertical => flip_vertical(image),
        Orientation::Transpose => flip_horizontal(&rotate90(image)),
        Orientation::Rotate90 => rotate90(image),
        Orientation::Transverse => flip_horizontal(&rotate270(image)),
        Orientation::Rotate270 => rotate270(image),
    }
}

fn copy<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| image.get_pixel(x, y))
}
