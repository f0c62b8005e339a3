//! Mirror transforms used by the mirrored Exif orientations

use image::{GenericImageView, ImageBuffer};

use crate::transform::Grid;

/// Mirrors left to right: (x, y) goes to (W-1-x, y)
pub fn flip_horizontal<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(width - 1 - x, y, image.get_pixel(x, y));
        }
    }

    out
}

/// Mirrors top to bottom: (x, y) goes to (x, H-1-y)
pub fn flip_vertical<I>(image: &I) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(width, height);

    for y in 0..height {
        for x in 0..width {
            out.put_pixel(x, height - 1 - y, image.get_pixel(x, y));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotation::rotate180;
    use image::GrayImage;

    #[test]
    fn horizontal_flip_reverses_rows() {
        let src = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(flip_horizontal(&src).into_raw(), vec![3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn vertical_flip_reverses_columns() {
        let src = GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(flip_vertical(&src).into_raw(), vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn empty_grids_flip_to_empty() {
        for (width, height) in [(0, 4), (4, 0), (0, 0)] {
            let src = GrayImage::new(width, height);
            assert_eq!(flip_horizontal(&src).dimensions(), (width, height));
            assert_eq!(flip_vertical(&src).dimensions(), (width, height));
        }
    }

    #[test]
    fn both_flips_equal_half_turn() {
        let src = GrayImage::from_fn(4, 3, |x, y| image::Luma([(x * 10 + y) as u8]));
        assert_eq!(flip_vertical(&flip_horizontal(&src)), rotate180(&src));
        assert_eq!(flip_horizontal(&flip_horizontal(&src)), src);
    }
}
