//! Orientation reader
//!
//! Entry points that open an image file, walk its JPEG segments and return
//! the Exif orientation. The file is read independently of the image
//! decoder, using nothing but seeks and reads on the raw bytes.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info, warn};

use crate::exif::constants::{markers, tags};
use crate::exif::directory::{ExifDirectory, IFDEntry};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::orientation::Orientation;
use crate::exif::segment::{Segment, SegmentScanner};
use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;

/// Reader for the Exif orientation of JPEG files
#[derive(Debug, Default)]
pub struct OrientationReader {
    /// Current file path
    current_file: Option<String>,
}

impl OrientationReader {
    /// Creates a new orientation reader
    pub fn new() -> Self {
        OrientationReader { current_file: None }
    }

    /// Path of the file most recently passed to [`OrientationReader::load`]
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Opens `filepath` and reads its orientation
    ///
    /// # Arguments
    /// * `filepath` - Path to the image file
    ///
    /// # Returns
    /// The orientation, `Normal` when the file has none, or the parse error
    pub fn load(&mut self, filepath: &str) -> ExifResult<Orientation> {
        info!("Reading orientation from: {}", filepath);
        self.current_file = Some(filepath.to_string());

        let file = File::open(Path::new(filepath)).map_err(ExifError::FileOpen)?;
        let mut reader = BufReader::new(file);

        self.read(&mut reader)
    }

    /// Reads the orientation from a stream positioned at the start of a JPEG
    ///
    /// A missing orientation tag is not an error. A stored value outside
    /// the defined range 1..=8 is reported and treated as `Normal`.
    pub fn read(&self, reader: &mut dyn SeekableReader) -> ExifResult<Orientation> {
        let mut scanner = SegmentScanner::new(reader);

        match scanner.find_orientation()? {
            Some(value) => match Orientation::from_exif(value) {
                Some(orientation) => {
                    debug!("Orientation tag: {}", orientation);
                    Ok(orientation)
                }
                None => {
                    warn!("Ignoring out-of-range orientation value {}", value);
                    Ok(Orientation::Normal)
                }
            },
            None => {
                debug!("No orientation tag found, assuming normal orientation");
                Ok(Orientation::Normal)
            }
        }
    }

    /// Like [`OrientationReader::load`], but falls back to `Normal` on parse errors
    ///
    /// Metadata problems are logged as warnings. Only errors that make the
    /// image itself unusable (the file cannot be opened) are returned.
    pub fn load_or_default(&mut self, filepath: &str) -> ExifResult<Orientation> {
        match self.load(filepath) {
            Ok(orientation) => Ok(orientation),
            Err(e) if e.is_recoverable() => {
                warn!("Could not read EXIF orientation: {}", e);
                Ok(Orientation::Normal)
            }
            Err(e) => Err(e),
        }
    }

    /// Collects a structural report of the file's metadata
    ///
    /// Unlike [`OrientationReader::read`], this does not stop at the first
    /// problem: whatever was found before an error is kept and the error is
    /// recorded in the report.
    pub fn inspect(&self, reader: &mut dyn SeekableReader) -> MetadataReport {
        let mut report = MetadataReport::default();
        let mut scanner = SegmentScanner::new(reader);

        loop {
            match scanner.next_segment() {
                Ok(Some(found)) => {
                    if report.byte_order.is_none() && found.marker == markers::APP1 {
                        report.describe_exif(&found);
                    }
                    report.segments.push(found);
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Segment scan stopped: {}", e);
                    report.errors.push(e.to_string());
                    break;
                }
            }
        }

        report
    }
}

/// Summary of the metadata found in a JPEG file
#[derive(Debug, Default)]
pub struct MetadataReport {
    /// Segments in stream order
    pub segments: Vec<Segment>,
    /// Byte order of the first Exif block
    pub byte_order: Option<ByteOrder>,
    /// Entries of IFD0 in the first Exif block
    pub entries: Vec<IFDEntry>,
    /// Orientation from the first Exif block that carries one
    pub orientation: Option<Orientation>,
    /// Problems met while scanning
    pub errors: Vec<String>,
}

impl MetadataReport {
    /// Fills in the Exif fields from an APP1 segment, if it holds Exif
    fn describe_exif(&mut self, found: &Segment) {
        let Some(tiff_data) = found.exif_tiff_data() else {
            return;
        };

        let described = ExifDirectory::parse(tiff_data).and_then(|directory| {
            self.byte_order = Some(directory.byte_order());
            self.entries = directory.entries()?;
            directory.find_short(tags::ORIENTATION)
        });

        match described {
            Ok(value) => self.orientation = value.and_then(Orientation::from_exif),
            Err(e) => self.errors.push(format!("Exif block at offset {}: {}", found.offset, e)),
        }
    }
}

impl fmt::Display for MetadataReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "JPEG Segments: {}", self.segments.len())?;
        for found in &self.segments {
            match found.length {
                Some(length) => writeln!(
                    f,
                    "  0xFF{:02X} {:<7} offset: {:<8} length: {}",
                    found.marker,
                    found.name(),
                    found.offset,
                    length
                )?,
                None => writeln!(f, "  0xFF{:02X} {:<7} offset: {}", found.marker, found.name(), found.offset)?,
            }
        }

        match self.byte_order {
            Some(order) => {
                writeln!(f, "Exif IFD0 ({}): {} entries", order.name(), self.entries.len())?;
                for entry in &self.entries {
                    writeln!(f, "  {}", entry)?;
                }
            }
            None => writeln!(f, "Exif: not present")?,
        }

        writeln!(f, "Orientation: {}", self.orientation.unwrap_or_default())?;

        for error in &self.errors {
            writeln!(f, "Warning: {}", error)?;
        }

        Ok(())
    }
}
