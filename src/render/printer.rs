//! Text output of a pixel grid

use std::fmt::Write as _;
use std::io::{self, Write};

use image::{GenericImageView, Rgba};

use crate::render::charset::Charset;
use crate::render::luminance::{pixel_to_glyph, premultiplied};

/// Turns an RGBA grid into rows of glyphs, one glyph per pixel
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    charset: Charset,
    color: bool,
    invert: bool,
}

impl TextRenderer {
    /// Creates a renderer for the given ramp
    pub fn new(charset: Charset) -> Self {
        TextRenderer {
            charset,
            color: false,
            invert: false,
        }
    }

    /// Wrap each glyph in a 24-bit foreground color escape
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Map bright pixels to sparse glyphs, for light terminal backgrounds
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// The ramp in use
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Renders the whole grid; every row ends with a newline
    pub fn render<I>(&self, image: &I) -> String
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let (width, height) = image.dimensions();
        let per_glyph = if self.color { 24 } else { 4 };
        let mut out = String::with_capacity((width as usize * per_glyph + 1) * height as usize);

        for y in 0..height {
            for x in 0..width {
                self.push_glyph(&mut out, &image.get_pixel(x, y));
            }
            out.push('\n');
        }

        out
    }

    /// Renders the grid into a writer
    pub fn write_to<I, W>(&self, image: &I, writer: &mut W) -> io::Result<()>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
        W: Write,
    {
        writer.write_all(self.render(image).as_bytes())?;
        writer.flush()
    }

    fn push_glyph(&self, out: &mut String, pixel: &Rgba<u8>) {
        let glyph = pixel_to_glyph(pixel, self.charset.glyphs(), self.invert);

        if self.color {
            let [r, g, b] = premultiplied(pixel);
            // Writing into a String cannot fail
            let _ = write!(out, "\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, glyph);
        } else {
            out.push(glyph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn ramp() -> Charset {
        Charset::new("test", " .#").unwrap()
    }

    fn checker() -> RgbaImage {
        RgbaImage::from_fn(3, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        })
    }

    #[test]
    fn plain_rows() {
        let renderer = TextRenderer::new(ramp());
        assert_eq!(renderer.render(&checker()), "# #\n # \n");
    }

    #[test]
    fn inverted_rows() {
        let renderer = TextRenderer::new(ramp()).with_invert(true);
        assert_eq!(renderer.render(&checker()), " # \n# #\n");
    }

    #[test]
    fn color_escapes() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([12, 34, 56, 255]));
        let renderer = TextRenderer::new(ramp()).with_color(true);
        assert_eq!(renderer.render(&image), "\x1b[38;2;12;34;56m \x1b[0m\n");
    }

    #[test]
    fn color_escapes_use_premultiplied_channels() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));
        let renderer = TextRenderer::new(ramp()).with_color(true);
        assert_eq!(renderer.render(&image), "\x1b[38;2;0;0;0m \x1b[0m\n");
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let renderer = TextRenderer::default();
        assert_eq!(renderer.render(&RgbaImage::new(0, 0)), "");
        assert_eq!(renderer.render(&RgbaImage::new(0, 2)), "\n\n");
    }

    #[test]
    fn write_to_matches_render() {
        let renderer = TextRenderer::new(ramp());
        let mut buffer = Vec::new();
        renderer.write_to(&checker(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), renderer.render(&checker()));
    }
}
