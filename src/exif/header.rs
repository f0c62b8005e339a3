//! TIFF header parsing for embedded Exif blocks
//!
//! The Exif payload of an APP1 segment is a small, self-contained TIFF file.
//! All offsets inside it are relative to the first byte of this header.

use log::debug;

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// Parsed TIFF header of an Exif block
pub struct TiffHeader {
    /// Byte order declared by the header
    pub byte_order: ByteOrder,
    /// Offset of IFD0 relative to the start of the header
    pub first_ifd_offset: u32,
    /// Reader for the declared byte order
    handler: Box<dyn ByteOrderHandler>,
}

impl TiffHeader {
    /// Parses and validates the 8-byte header at the start of `data`
    ///
    /// # Arguments
    /// * `data` - The TIFF block (Exif payload minus its signature)
    ///
    /// # Returns
    /// The header, or the first validation error encountered
    pub fn parse(data: &[u8]) -> ExifResult<Self> {
        if data.len() < header::HEADER_SIZE {
            return Err(ExifError::InvalidTiffHeader);
        }

        let byte_order = ByteOrder::detect(data)?;
        debug!("Detected byte order: {}", byte_order.name());
        let handler = byte_order.create_handler();

        let version = handler.read_u16(data, 2)?;
        if version != header::TIFF_VERSION {
            debug!("Unexpected TIFF version: {}", version);
            return Err(ExifError::InvalidTiffHeader);
        }

        let first_ifd_offset = handler.read_u32(data, 4)?;
        debug!("First IFD offset: {}", first_ifd_offset);

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
            handler,
        })
    }

    /// Returns the byte order handler selected by this header
    pub fn handler(&self) -> &dyn ByteOrderHandler {
        self.handler.as_ref()
    }
}
