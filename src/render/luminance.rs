//! Brightness to glyph mapping

use image::Rgba;

/// Rec. 709 luma weights for red, green and blue
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Color channels scaled by alpha, as composited over black
pub fn premultiplied(pixel: &Rgba<u8>) -> [u8; 3] {
    let [r, g, b, a] = pixel.0;
    let scale = |c: u8| ((u16::from(c) * u16::from(a) + 127) / 255) as u8;
    [scale(r), scale(g), scale(b)]
}

/// Relative luminance of an 8-bit pixel, in 0.0..=255.0
///
/// Channels are premultiplied by alpha first, so transparent pixels are dark.
pub fn luminance(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b] = premultiplied(pixel);
    LUMA_WEIGHTS[0] * f64::from(r) + LUMA_WEIGHTS[1] * f64::from(g) + LUMA_WEIGHTS[2] * f64::from(b)
}

/// Index into a ramp of `levels` glyphs for the given luminance
///
/// Computes `floor(lum / 255 * (levels - 1))`, clamped into the ramp.
pub fn glyph_index(luminance: f64, levels: usize, invert: bool) -> usize {
    if levels == 0 {
        return 0;
    }

    let scale = (luminance / 255.0).clamp(0.0, 1.0);
    let scale = if invert { 1.0 - scale } else { scale };
    // Lifts values that sit exactly on a level boundary, e.g. white to the last glyph
    let index = (scale * (levels - 1) as f64 + 1e-9) as usize;

    index.min(levels - 1)
}

/// Picks the glyph for a pixel from a darkest-to-brightest ramp
pub fn pixel_to_glyph(pixel: &Rgba<u8>, glyphs: &[char], invert: bool) -> char {
    glyphs
        .get(glyph_index(luminance(pixel), glyphs.len(), invert))
        .copied()
        .unwrap_or(' ')
}
