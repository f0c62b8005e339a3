//! JPEG and TIFF format constants
//!
//! Named values for the markers, signatures and tags the metadata parser
//! looks for, so the scanning code never deals in bare magic numbers.

/// JPEG marker constants (second byte of the 0xFF XX pair)
pub mod markers {
    /// Every marker begins with this byte
    pub const PREFIX: u8 = 0xFF;

    /// Start of image
    pub const SOI: u8 = 0xD8;

    /// End of image
    pub const EOI: u8 = 0xD9;

    /// Start of scan; entropy-coded data follows
    pub const SOS: u8 = 0xDA;

    /// APP1, which carries the Exif block
    pub const APP1: u8 = 0xE1;

    /// Temporary marker, no length field
    pub const TEM: u8 = 0x01;

    /// First restart marker (RST0), no length field
    pub const RST0: u8 = 0xD0;

    /// Last restart marker (RST7), no length field
    pub const RST7: u8 = 0xD7;

    /// Returns true for markers that are not followed by a length field
    pub fn is_standalone(marker: u8) -> bool {
        marker == TEM || (RST0..=RST7).contains(&marker)
    }

    /// Returns a short name for a marker, for inspection output
    pub fn name(marker: u8) -> &'static str {
        match marker {
            SOI => "SOI",
            EOI => "EOI",
            SOS => "SOS",
            TEM => "TEM",
            RST0..=RST7 => "RST",
            0xC0 => "SOF0",
            0xC1 => "SOF1",
            0xC2 => "SOF2",
            0xC4 => "DHT",
            0xDB => "DQT",
            0xDD => "DRI",
            0xE0 => "APP0",
            APP1 => "APP1",
            0xE2..=0xEF => "APPn",
            0xFE => "COM",
            _ => "unknown",
        }
    }
}

/// Segment layout constants
pub mod segment {
    /// Identifier at the start of an Exif APP1 payload
    pub const EXIF_SIGNATURE: [u8; 6] = *b"Exif\0\0";

    /// Size of the length field, which counts itself
    pub const LENGTH_FIELD_SIZE: u16 = 2;
}

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Byte order (2) + magic (2) + first IFD offset (4)
    pub const HEADER_SIZE: usize = 8;

    /// Size of the IFD entry count field
    pub const ENTRY_COUNT_SIZE: usize = 2;

    /// Size of a single classic TIFF IFD entry
    pub const ENTRY_SIZE: usize = 12;

    /// Offset of the value/offset field inside an entry
    pub const ENTRY_VALUE_OFFSET: usize = 8;
}

/// Tags of interest inside the Exif IFD0
pub mod tags {
    pub const MAKE: u16 = 0x010F;
    pub const MODEL: u16 = 0x0110;
    pub const ORIENTATION: u16 = 0x0112;
    pub const X_RESOLUTION: u16 = 0x011A;
    pub const Y_RESOLUTION: u16 = 0x011B;
    pub const RESOLUTION_UNIT: u16 = 0x0128;
    pub const SOFTWARE: u16 = 0x0131;
    pub const DATE_TIME: u16 = 0x0132;
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    pub const GPS_IFD_POINTER: u16 = 0x8825;

    /// Returns a human-readable name for a tag id
    pub fn name(tag: u16) -> &'static str {
        match tag {
            MAKE => "Make",
            MODEL => "Model",
            ORIENTATION => "Orientation",
            X_RESOLUTION => "XResolution",
            Y_RESOLUTION => "YResolution",
            RESOLUTION_UNIT => "ResolutionUnit",
            SOFTWARE => "Software",
            DATE_TIME => "DateTime",
            EXIF_IFD_POINTER => "ExifIFDPointer",
            GPS_IFD_POINTER => "GPSInfoIFDPointer",
            _ => "Unknown",
        }
    }
}

/// Field types as defined by TIFF 6.0
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator

    /// Returns a human-readable name for a field type
    pub fn name(field_type: u16) -> &'static str {
        match field_type {
            BYTE => "BYTE",
            ASCII => "ASCII",
            SHORT => "SHORT",
            LONG => "LONG",
            RATIONAL => "RATIONAL",
            UNDEFINED => "UNDEFINED",
            SLONG => "SLONG",
            SRATIONAL => "SRATIONAL",
            _ => "UNKNOWN",
        }
    }
}
