//! JPEG/Exif orientation parsing module
//!
//! This module walks the segment structure of a JPEG file and decodes the
//! orientation tag from the TIFF directory embedded in its Exif APP1
//! segment, without relying on an external metadata library.

pub mod errors;
pub mod constants;
pub mod header;
pub mod directory;
pub mod segment;
pub mod orientation;
pub mod reader;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{ExifError, ExifResult};
pub use directory::{read_orientation_tag, ExifDirectory, IFDEntry};
pub use header::TiffHeader;
pub use segment::{Segment, SegmentScanner};
pub use orientation::Orientation;
pub use reader::{MetadataReport, OrientationReader};
