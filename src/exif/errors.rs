//! Custom error types for image metadata and rendering

use std::fmt;
use std::io;

/// Errors raised while locating orientation metadata or loading an image
#[derive(Debug)]
pub enum ExifError {
    /// The input file could not be opened
    FileOpen(io::Error),
    /// I/O error while reading an already opened stream
    IoError(io::Error),
    /// Stream does not start with the start-of-image marker
    NotAJpeg,
    /// A marker did not start with 0xFF (carries the offending byte)
    MalformedMarker(u8),
    /// Segment length field smaller than the length field itself
    InvalidSegmentLength { marker: u8, length: u16 },
    /// Stream ended inside a segment (carries the segment marker)
    TruncatedSegment(u8),
    /// Invalid TIFF header
    InvalidTiffHeader,
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// First IFD offset points outside the TIFF block
    InvalidIfdOffset { offset: u32, len: usize },
    /// A read of `width` bytes at `offset` would overrun a block of `len` bytes
    OutOfBounds { offset: usize, width: usize, len: usize },
    /// The image decoder rejected the file
    ImageDecode(image::ImageError),
    /// Generic error with message
    GenericError(String),
}

impl ExifError {
    /// Whether the caller may fall back to the default orientation
    ///
    /// File-open and decode failures abort the program; everything raised
    /// while walking the metadata only costs us the orientation.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ExifError::FileOpen(_) | ExifError::ImageDecode(_) | ExifError::GenericError(_)
        )
    }
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::FileOpen(e) => write!(f, "Failed to open file: {}", e),
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::NotAJpeg => write!(f, "Not a JPEG file"),
            ExifError::MalformedMarker(b) => write!(f, "Invalid marker found: {:#04x}", b),
            ExifError::InvalidSegmentLength { marker, length } => {
                write!(f, "Invalid length {} for segment 0xFF{:02X}", length, marker)
            }
            ExifError::TruncatedSegment(marker) => write!(f, "Truncated segment 0xFF{:02X}", marker),
            ExifError::InvalidTiffHeader => write!(f, "Invalid TIFF header"),
            ExifError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            ExifError::InvalidIfdOffset { offset, len } => {
                write!(f, "Invalid IFD offset: {} (TIFF block size: {})", offset, len)
            }
            ExifError::OutOfBounds { offset, width, len } => {
                write!(f, "Read of {} bytes at offset {} exceeds block of {} bytes", width, offset, len)
            }
            ExifError::ImageDecode(e) => write!(f, "Failed to decode image: {}", e),
            ExifError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExifError::FileOpen(e) | ExifError::IoError(e) => Some(e),
            ExifError::ImageDecode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

impl From<image::ImageError> for ExifError {
    fn from(error: image::ImageError) -> Self {
        ExifError::ImageDecode(error)
    }
}

/// Result type for metadata and rendering operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
