//! Image File Directory (IFD) decoding for Exif blocks
//!
//! Only the first directory (IFD0) is decoded. Orientation always lives
//! there, and following the next-IFD chain would add no information for a
//! renderer.

use std::fmt;

use log::{debug, trace};

use crate::exif::constants::{field_types, header, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::header::TiffHeader;
use crate::io::byte_order::ByteOrder;

/// Represents an entry in an Image File Directory (IFD)
///
/// Entries are fixed 12-byte records. `value_offset` holds either the value
/// itself (when it fits in 4 bytes) or the offset of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value or offset to values
    pub value_offset: u32,
}

impl IFDEntry {
    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        format!(
            "Tag: {:#06x} ({}), Type: {} ({}), Count: {}, Value/Offset: {}",
            self.tag,
            tags::name(self.tag),
            self.field_type,
            field_types::name(self.field_type),
            self.count,
            self.value_offset
        )
    }
}

impl fmt::Display for IFDEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// IFD0 of an Exif TIFF block, borrowed from the segment payload
pub struct ExifDirectory<'a> {
    data: &'a [u8],
    header: TiffHeader,
    offset: usize,
    entry_count: u16,
}

impl<'a> ExifDirectory<'a> {
    /// Parses the TIFF header and locates IFD0
    ///
    /// # Arguments
    /// * `data` - The TIFF block, starting at the byte order marker
    ///
    /// # Returns
    /// The directory, or an error if the header or IFD offset is invalid
    pub fn parse(data: &'a [u8]) -> ExifResult<Self> {
        let header = TiffHeader::parse(data)?;

        let offset = header.first_ifd_offset as usize;
        let fits = offset
            .checked_add(header::ENTRY_COUNT_SIZE)
            .is_some_and(|end| end <= data.len());
        if !fits {
            return Err(ExifError::InvalidIfdOffset {
                offset: header.first_ifd_offset,
                len: data.len(),
            });
        }

        let entry_count = header.handler().read_u16(data, offset)?;
        debug!("IFD0 at offset {} declares {} entries", offset, entry_count);

        Ok(ExifDirectory {
            data,
            header,
            offset,
            entry_count,
        })
    }

    /// Byte order of the underlying TIFF block
    pub fn byte_order(&self) -> ByteOrder {
        self.header.byte_order
    }

    /// Offset of IFD0 inside the TIFF block
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of entries the directory claims to hold
    pub fn entry_count(&self) -> u16 {
        self.entry_count
    }

    /// Start offsets of the entries that lie entirely inside the block
    ///
    /// A directory that claims more entries than the block can hold is cut
    /// short at the last complete entry.
    fn entry_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        let first = self.offset + header::ENTRY_COUNT_SIZE;
        (0..self.entry_count as usize)
            .map(move |i| first + i * header::ENTRY_SIZE)
            .take_while(move |&start| {
                let complete = start + header::ENTRY_SIZE <= self.data.len();
                if !complete {
                    debug!("IFD0 truncated at entry offset {}", start);
                }
                complete
            })
    }

    /// Finds a tag and reads the first two bytes of its value as a SHORT
    ///
    /// # Returns
    /// `Ok(Some(value))` for the first matching entry, `Ok(None)` when no
    /// complete entry carries the tag
    pub fn find_short(&self, tag: u16) -> ExifResult<Option<u16>> {
        let handler = self.header.handler();

        for start in self.entry_offsets() {
            let entry_tag = handler.read_u16(self.data, start)?;
            trace!("IFD0 entry at {}: tag {:#06x}", start, entry_tag);

            if entry_tag == tag {
                let value = handler.read_u16(self.data, start + header::ENTRY_VALUE_OFFSET)?;
                debug!("Found tag {:#06x} ({}) with value {}", tag, tags::name(tag), value);
                return Ok(Some(value));
            }
        }

        debug!("Tag {:#06x} ({}) not found in IFD0", tag, tags::name(tag));
        Ok(None)
    }

    /// Decodes every complete entry of the directory
    pub fn entries(&self) -> ExifResult<Vec<IFDEntry>> {
        let handler = self.header.handler();

        self.entry_offsets()
            .map(|start| {
                Ok(IFDEntry {
                    tag: handler.read_u16(self.data, start)?,
                    field_type: handler.read_u16(self.data, start + 2)?,
                    count: handler.read_u32(self.data, start + 4)?,
                    value_offset: handler.read_u32(self.data, start + header::ENTRY_VALUE_OFFSET)?,
                })
            })
            .collect()
    }
}

/// Reads the raw orientation value from a TIFF block
///
/// # Arguments
/// * `tiff_data` - Exif payload with the 6-byte signature already removed
///
/// # Returns
/// The stored 16-bit value, or `None` if IFD0 has no orientation entry
pub fn read_orientation_tag(tiff_data: &[u8]) -> ExifResult<Option<u16>> {
    ExifDirectory::parse(tiff_data)?.find_short(tags::ORIENTATION)
}
