//! Fixed-angle rotations
//!
//! Each rotation is a pure coordinate remap over the full source: every
//! pixel is copied verbatim into a freshly allocated grid.

use image::{GenericImageView, ImageBuffer};

use crate::transform::Grid;

/// Rotates 90° clockwise: (x, y) in W×H goes to (H-1-y, x) in H×W
pub fn rotate90<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(height, width);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(height - 1 - y, x, image.get_pixel(x, y));
        }
    }

    out
}

/// Rotates 180°: (x, y) goes to (W-1-x, H-1-y)
pub fn rotate180<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(width - 1 - x, height - 1 - y, image.get_pixel(x, y));
        }
    }

    out
}

/// Rotates 270° clockwise: (x, y) in W×H goes to (y, W-1-x) in H×W
pub fn rotate270<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(height, width);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(y, width - 1 - x, image.get_pixel(x, y));
        }
    }

    out
}
