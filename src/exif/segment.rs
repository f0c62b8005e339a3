//! JPEG segment scanning
//!
//! Walks a JPEG stream marker by marker. APP1 payloads are read into memory
//! so their Exif block can be decoded; every other segment is skipped with a
//! relative seek.

use std::io::{self, Read, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};

use crate::exif::constants::{markers, segment};
use crate::exif::directory;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// A segment header as found in the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Second byte of the marker pair
    pub marker: u8,
    /// Stream position of the 0xFF marker byte
    pub offset: u64,
    /// Length field, counting itself; `None` for standalone markers
    pub length: Option<u16>,
    /// Segment body, only loaded for APP1
    pub payload: Option<Vec<u8>>,
}

impl Segment {
    /// Returns the TIFF block of an Exif APP1 payload
    ///
    /// `None` when the segment carries no payload or the payload does not
    /// start with the `Exif\0\0` signature.
    pub fn exif_tiff_data(&self) -> Option<&[u8]> {
        self.payload
            .as_deref()
            .and_then(|payload| payload.strip_prefix(&segment::EXIF_SIGNATURE[..]))
    }

    /// Short marker name, e.g. "APP1"
    pub fn name(&self) -> &'static str {
        markers::name(self.marker)
    }
}

/// Sequential scanner over the segments of a JPEG stream
pub struct SegmentScanner<'r> {
    reader: &'r mut dyn SeekableReader,
    started: bool,
    finished: bool,
}

impl<'r> SegmentScanner<'r> {
    /// Creates a scanner; the reader must be positioned at the start of the file
    pub fn new(reader: &'r mut dyn SeekableReader) -> Self {
        SegmentScanner {
            reader,
            started: false,
            finished: false,
        }
    }

    /// Consumes the start-of-image marker
    fn read_start(&mut self) -> ExifResult<()> {
        let mut soi = [0u8; 2];
        if !read_fully(self.reader, &mut soi)? || soi != [markers::PREFIX, markers::SOI] {
            return Err(ExifError::NotAJpeg);
        }
        trace!("Found start-of-image marker");
        Ok(())
    }

    /// Reads the big-endian length field, `None` if the stream ends first
    fn read_length(&mut self) -> ExifResult<Option<u16>> {
        match self.reader.read_u16::<BigEndian>() {
            Ok(length) => Ok(Some(length)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(ExifError::IoError(e)),
        }
    }

    /// Returns the next segment, or `None` once the scan is over
    ///
    /// The scan ends normally at end of stream, after a start-of-scan
    /// header, at end-of-image, or when a non-APP1 segment cannot be
    /// skipped. An APP1 segment cut short by end of stream is an error.
    pub fn next_segment(&mut self) -> ExifResult<Option<Segment>> {
        if !self.started {
            self.read_start()?;
            self.started = true;
        }
        if self.finished {
            return Ok(None);
        }

        let offset = self.reader.stream_position()?;
        let mut pair = [0u8; 2];
        if !read_fully(self.reader, &mut pair)? {
            debug!("End of stream at offset {}", offset);
            self.finished = true;
            return Ok(None);
        }
        if pair[0] != markers::PREFIX {
            return Err(ExifError::MalformedMarker(pair[0]));
        }

        let marker = pair[1];
        if markers::is_standalone(marker) || marker == markers::EOI {
            trace!("Standalone marker 0xFF{:02X} at offset {}", marker, offset);
            self.finished = marker == markers::EOI;
            return Ok(Some(Segment {
                marker,
                offset,
                length: None,
                payload: None,
            }));
        }

        let length = match self.read_length()? {
            Some(length) => length,
            None if marker == markers::APP1 => return Err(ExifError::TruncatedSegment(marker)),
            None => {
                debug!("Stream ended inside 0xFF{:02X} header", marker);
                self.finished = true;
                return Ok(None);
            }
        };
        if length < segment::LENGTH_FIELD_SIZE {
            return Err(ExifError::InvalidSegmentLength { marker, length });
        }
        let body = usize::from(length - segment::LENGTH_FIELD_SIZE);
        trace!("Segment 0xFF{:02X} at offset {} with length {}", marker, offset, length);

        let mut found = Segment {
            marker,
            offset,
            length: Some(length),
            payload: None,
        };

        if marker == markers::SOS {
            // Entropy-coded data follows; no metadata segment can come after it.
            debug!("Reached start of scan at offset {}", offset);
            self.finished = true;
        } else if marker == markers::APP1 {
            let mut payload = vec![0u8; body];
            self.reader.read_exact(&mut payload).map_err(|e| match e.kind() {
                io::ErrorKind::UnexpectedEof => ExifError::TruncatedSegment(marker),
                _ => ExifError::IoError(e),
            })?;
            found.payload = Some(payload);
        } else if let Err(e) = self.reader.seek(SeekFrom::Current(body as i64)) {
            debug!("Could not skip segment 0xFF{:02X}: {}", marker, e);
            self.finished = true;
        }

        Ok(Some(found))
    }

    /// Scans for the orientation tag in the first Exif APP1 that carries one
    ///
    /// APP1 segments that are not Exif (e.g. XMP) are skipped, as are Exif
    /// blocks without an orientation entry. Decoding errors inside an Exif
    /// block are returned to the caller.
    pub fn find_orientation(&mut self) -> ExifResult<Option<u16>> {
        while let Some(found) = self.next_segment()? {
            if found.marker != markers::APP1 {
                continue;
            }

            let Some(tiff_data) = found.exif_tiff_data() else {
                debug!("APP1 segment at offset {} is not Exif, skipping", found.offset);
                continue;
            };

            if let Some(value) = directory::read_orientation_tag(tiff_data)? {
                return Ok(Some(value));
            }
        }

        Ok(None)
    }

    /// Collects every segment up to the end of the scan
    pub fn segments(&mut self) -> ExifResult<Vec<Segment>> {
        let mut found = Vec::new();
        while let Some(next) = self.next_segment()? {
            found.push(next);
        }
        Ok(found)
    }
}

/// Fills `buf` completely, returning `false` if the stream ends first
fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> ExifResult<bool> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(ExifError::IoError(e)),
    }
}
