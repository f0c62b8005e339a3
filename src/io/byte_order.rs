//! Byte order handling for embedded TIFF directories
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading integers out of
//! an in-memory TIFF block. Every read is bounds-checked against the slice
//! it is reading from.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};

/// Represents the byte order of a TIFF block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the first two bytes of a TIFF header
    pub fn detect(data: &[u8]) -> ExifResult<Self> {
        let marker = field(data, 0, 2)?;
        match [marker[0], marker[1]] {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(ExifError::InvalidByteOrder(BigEndian::read_u16(marker))),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
///
/// Offsets are absolute positions inside `data`. A read that would run past
/// the end of the slice returns [`ExifError::OutOfBounds`].
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value at `offset`
    fn read_u16(&self, data: &[u8], offset: usize) -> ExifResult<u16>;

    /// Read a u32 value at `offset`
    fn read_u32(&self, data: &[u8], offset: usize) -> ExifResult<u32>;

    /// The byte order this handler decodes
    fn byte_order(&self) -> ByteOrder;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, data: &[u8], offset: usize) -> ExifResult<u16> {
        Ok(LittleEndian::read_u16(field(data, offset, 2)?))
    }

    fn read_u32(&self, data: &[u8], offset: usize) -> ExifResult<u32> {
        Ok(LittleEndian::read_u32(field(data, offset, 4)?))
    }

    fn byte_order(&self) -> ByteOrder {
        ByteOrder::LittleEndian
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, data: &[u8], offset: usize) -> ExifResult<u16> {
        Ok(BigEndian::read_u16(field(data, offset, 2)?))
    }

    fn read_u32(&self, data: &[u8], offset: usize) -> ExifResult<u32> {
        Ok(BigEndian::read_u32(field(data, offset, 4)?))
    }

    fn byte_order(&self) -> ByteOrder {
        ByteOrder::BigEndian
    }
}

/// Borrows `width` bytes at `offset`, or reports where the read would overrun
fn field(data: &[u8], offset: usize, width: usize) -> ExifResult<&[u8]> {
    offset
        .checked_add(width)
        .and_then(|end| data.get(offset..end))
        .ok_or(ExifError::OutOfBounds {
            offset,
            width,
            len: data.len(),
        })
}
