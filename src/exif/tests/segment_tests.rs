//! Tests for JPEG segment scanning

extern crate std;

use std::io::Cursor;

use crate::exif::errors::ExifError;
use crate::exif::segment::SegmentScanner;
use crate::exif::tests::test_utils::{
    create_exif_segment, create_jpeg, create_orientation_block, create_segment, create_tiff_block,
};
use crate::io::byte_order::ByteOrder;

fn scan(mut cursor: Cursor<Vec<u8>>) -> Result<Option<u16>, ExifError> {
    SegmentScanner::new(&mut cursor).find_orientation()
}

#[test]
fn test_minimal_exif_jpeg() {
    let bytes = std::vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xE1, 0x00, 0x22, // APP1, length 34
        b'E', b'x', b'i', b'f', 0x00, 0x00,
        0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00,
        0x01, 0x00,
        0x12, 0x01, 0x03, 0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ];
    std::assert_eq!(scan(Cursor::new(bytes)).unwrap(), Some(6));
}

#[test]
fn test_unrelated_tag_yields_none() {
    let block = create_tiff_block(ByteOrder::LittleEndian, &[(0x0110, 3, 1, 6)]);
    let jpeg = create_jpeg(&[create_exif_segment(&block)]);
    std::assert_eq!(scan(jpeg).unwrap(), None);
}

#[test]
fn test_not_a_jpeg() {
    let cursor = Cursor::new(b"\x89PNG\r\n\x1a\n".to_vec());
    std::assert!(std::matches!(scan(cursor), Err(ExifError::NotAJpeg)));
}

#[test]
fn test_empty_stream_is_not_a_jpeg() {
    std::assert!(std::matches!(scan(Cursor::new(std::vec![])), Err(ExifError::NotAJpeg)));
    std::assert!(std::matches!(scan(Cursor::new(std::vec![0xFF])), Err(ExifError::NotAJpeg)));
}

#[test]
fn test_soi_only_defaults() {
    std::assert_eq!(scan(create_jpeg(&[])).unwrap(), None);
}

#[test]
fn test_stream_ending_mid_marker_defaults() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().push(0xFF);
    std::assert_eq!(scan(cursor).unwrap(), None);
}

#[test]
fn test_malformed_marker() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0x12, 0xE1, 0x00, 0x02]);
    std::assert!(std::matches!(scan(cursor), Err(ExifError::MalformedMarker(0x12))));
}

#[test]
fn test_other_segments_are_skipped() {
    let jfif = create_segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0");
    let comment = create_segment(0xFE, b"hello");
    let exif = create_exif_segment(&create_orientation_block(ByteOrder::BigEndian, 8));

    std::assert_eq!(scan(create_jpeg(&[jfif, comment, exif])).unwrap(), Some(8));
}

#[test]
fn test_non_exif_app1_is_skipped() {
    let xmp = create_segment(0xE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>");
    let exif = create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 3));

    std::assert_eq!(scan(create_jpeg(&[xmp, exif])).unwrap(), Some(3));
}

#[test]
fn test_tiny_app1_is_skipped() {
    let tiny = create_segment(0xE1, b"Ex");
    std::assert_eq!(scan(create_jpeg(&[tiny])).unwrap(), None);
}

#[test]
fn test_exif_without_orientation_continues_to_next_app1() {
    let first = create_exif_segment(&create_tiff_block(ByteOrder::LittleEndian, &[(0x010F, 2, 4, 0)]));
    let second = create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 6));

    std::assert_eq!(scan(create_jpeg(&[first, second])).unwrap(), Some(6));
}

#[test]
fn test_first_orientation_short_circuits() {
    let first = create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 6));
    // Garbage after the first hit is never read
    let mut cursor = create_jpeg(&[first]);
    cursor.get_mut().extend_from_slice(&[0x00, 0x00, 0x00]);

    std::assert_eq!(scan(cursor).unwrap(), Some(6));
}

#[test]
fn test_invalid_tiff_in_exif_is_an_error() {
    let mut block = create_orientation_block(ByteOrder::LittleEndian, 6);
    block[0] = b'Q';
    let jpeg = create_jpeg(&[create_exif_segment(&block)]);

    std::assert!(std::matches!(scan(jpeg), Err(ExifError::InvalidByteOrder(_))));
}

#[test]
fn test_negative_app1_length_is_rejected() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xE1, 0x00, 0x01, b'E', b'x', b'i', b'f']);

    let mut scanner = SegmentScanner::new(&mut cursor);
    let result = scanner.next_segment();
    std::assert!(std::matches!(
        result,
        Err(ExifError::InvalidSegmentLength { marker: 0xE1, length: 1 })
    ));
    // Nothing past the length field was consumed
    std::assert_eq!(cursor.position(), 6);
}

#[test]
fn test_negative_length_on_other_segment_is_rejected() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xE0, 0x00, 0x00]);
    std::assert!(std::matches!(
        scan(cursor),
        Err(ExifError::InvalidSegmentLength { marker: 0xE0, length: 0 })
    ));
}

#[test]
fn test_truncated_app1_payload() {
    let mut segment = create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 6));
    segment.truncate(segment.len() - 4);

    std::assert!(std::matches!(
        scan(create_jpeg(&[segment])),
        Err(ExifError::TruncatedSegment(0xE1))
    ));
}

#[test]
fn test_truncated_app1_length() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xE1, 0x00]);
    std::assert!(std::matches!(scan(cursor), Err(ExifError::TruncatedSegment(0xE1))));
}

#[test]
fn test_truncated_other_length_defaults() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xDB, 0x00]);
    std::assert_eq!(scan(cursor).unwrap(), None);
}

#[test]
fn test_skip_past_end_defaults() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xE0, 0x10, 0x00, 0x01]);
    std::assert_eq!(scan(cursor).unwrap(), None);
}

#[test]
fn test_standalone_markers_are_stepped_over() {
    let mut cursor = create_jpeg(&[]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xD0, 0xFF, 0x01]);
    cursor
        .get_mut()
        .extend_from_slice(&create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 8)));

    std::assert_eq!(scan(cursor).unwrap(), Some(8));
}

#[test]
fn test_scan_stops_at_start_of_scan() {
    let sos = create_segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    let mut cursor = create_jpeg(&[sos]);
    // Entropy-coded bytes that would be a malformed marker if parsed
    cursor.get_mut().extend_from_slice(&[0x12, 0x34, 0x56, 0xFF, 0xD9]);

    std::assert_eq!(scan(cursor).unwrap(), None);
}

#[test]
fn test_segments_are_listed_in_order() {
    let jfif = create_segment(0xE0, b"JFIF\0");
    let exif = create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 1));
    let exif_len = exif.len() as u64;
    let mut cursor = create_jpeg(&[jfif, exif]);
    cursor.get_mut().extend_from_slice(&[0xFF, 0xD9]);

    let segments = SegmentScanner::new(&mut cursor).segments().unwrap();
    let summary: std::vec::Vec<_> = segments.iter().map(|s| (s.marker, s.offset, s.length)).collect();

    std::assert_eq!(
        summary,
        std::vec![
            (0xE0, 2, Some(7)),
            (0xE1, 11, Some((exif_len - 2) as u16)),
            (0xD9, 11 + exif_len, None),
        ]
    );
    std::assert!(segments[0].payload.is_none());
    std::assert!(segments[1].exif_tiff_data().is_some());
    std::assert_eq!(segments[1].name(), "APP1");
}
