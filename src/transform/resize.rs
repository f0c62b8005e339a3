//! Nearest-neighbor resampling

use image::{GenericImageView, ImageBuffer};
use log::trace;

use crate::transform::Grid;

/// Maps a destination coordinate to its source coordinate
///
/// Computes `floor(dst * src_len / dst_len)` in integer arithmetic and
/// clamps the result to the last source index. `src_len` and `dst_len`
/// must both be non-zero.
pub(crate) fn source_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    let scaled = u64::from(dst) * u64::from(src_len) / u64::from(dst_len);
    scaled.min(u64::from(src_len - 1)) as u32
}

/// Resamples `image` to `new_width` × `new_height` by nearest neighbor
///
/// No interpolation or anti-aliasing is applied. Resizing to the source
/// dimensions reproduces the source exactly. A zero target dimension gives
/// an empty grid; an empty source gives a grid of default pixels.
pub fn resize_nearest<I>(image: &I, new_width: u32, new_height: u32) -> Grid<I::Pixel>
where
    I: GenericImageView,
    I::Pixel: 'static,
{
    let (width, height) = image.dimensions();
    let mut out: Grid<I::Pixel> = ImageBuffer::new(new_width, new_height);

    if width == 0 || height == 0 {
        trace!("Resizing empty {}x{} source, output left blank", width, height);
        return out;
    }

    for y in 0..new_height {
        let src_y = source_index(y, height, new_height);
        for x in 0..new_width {
            let src_x = source_index(x, width, new_width);
            out.put_pixel(x, y, image.get_pixel(src_x, src_y));
        }
    }

    out
}
