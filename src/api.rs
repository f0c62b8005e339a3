use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbaImage};
use log::{debug, info};

use crate::config::RenderOptions;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::{MetadataReport, Orientation, OrientationReader};
use crate::render::TextRenderer;
use crate::transform::{apply_orientation, resize_nearest};

/// Main interface to the glyphcast library
#[derive(Debug, Clone, Default)]
pub struct Glyphcast {
    options: RenderOptions,
}

impl Glyphcast {
    /// Create a new instance with the given rendering options
    pub fn new(options: RenderOptions) -> Self {
        Glyphcast { options }
    }

    /// Options used by [`Glyphcast::render`]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Read the Exif orientation of a file
    ///
    /// Metadata that is missing or malformed yields `Orientation::Normal`
    /// and a logged warning.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// The orientation, or an error if the file cannot be opened
    pub fn orientation(&self, input_path: &str) -> ExifResult<Orientation> {
        OrientationReader::new().load_or_default(input_path)
    }

    /// Decode an image file, guessing its format from the content
    pub fn load_image(&self, input_path: &str) -> ExifResult<DynamicImage> {
        let file = File::open(Path::new(input_path)).map_err(ExifError::FileOpen)?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| ExifError::ImageDecode(ImageError::IoError(e)))?;

        let image = reader.decode()?;
        debug!("Decoded {}x{} image from {}", image.width(), image.height(), input_path);
        Ok(image)
    }

    /// Decode an image file and turn it upright
    ///
    /// Orientation is read before decoding, from the raw file bytes. When
    /// orientation correction is disabled the pixels are returned as stored.
    pub fn load_oriented(&self, input_path: &str) -> ExifResult<RgbaImage> {
        let orientation = if self.options.orient {
            self.orientation(input_path)?
        } else {
            Orientation::Normal
        };
        info!("Orientation for {}: {}", input_path, orientation);

        let image = self.load_image(input_path)?.into_rgba8();
        if orientation == Orientation::Normal {
            return Ok(image);
        }

        Ok(apply_orientation(&image, orientation))
    }

    /// Render an upright pixel grid as text at the configured size
    pub fn render_image(&self, image: &RgbaImage) -> String {
        let resized = resize_nearest(image, self.options.width, self.options.height);

        TextRenderer::new(self.options.charset.clone())
            .with_color(self.options.color)
            .with_invert(self.options.invert)
            .render(&resized)
    }

    /// Load, orient and render an image file
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// The text rendering, one line per output row
    pub fn render(&self, input_path: &str) -> ExifResult<String> {
        let image = self.load_oriented(input_path)?;
        Ok(self.render_image(&image))
    }

    /// Describe the JPEG segments and Exif directory of a file
    pub fn inspect(&self, input_path: &str) -> ExifResult<MetadataReport> {
        let file = File::open(Path::new(input_path)).map_err(ExifError::FileOpen)?;
        let mut reader = BufReader::new(file);

        Ok(OrientationReader::new().inspect(&mut reader))
    }
}
