//! Tests for the orientation reader and metadata report

extern crate std;

use std::io::Cursor;

use crate::exif::errors::ExifError;
use crate::exif::orientation::Orientation;
use crate::exif::reader::OrientationReader;
use crate::exif::tests::test_utils::{
    create_exif_segment, create_jpeg, create_orientation_block, create_segment, create_tiff_block,
};
use crate::io::byte_order::ByteOrder;

#[test]
fn test_read_each_orientation() {
    let reader = OrientationReader::new();
    for value in 1..=8u16 {
        let mut jpeg = create_jpeg(&[create_exif_segment(&create_orientation_block(ByteOrder::BigEndian, value))]);
        let orientation = reader.read(&mut jpeg).unwrap();
        std::assert_eq!(orientation.to_exif(), value);
    }
}

#[test]
fn test_missing_tag_reads_as_normal() {
    let reader = OrientationReader::new();
    let mut jpeg = create_jpeg(&[create_exif_segment(&create_tiff_block(ByteOrder::LittleEndian, &[(0x0110, 3, 1, 6)]))]);
    std::assert_eq!(reader.read(&mut jpeg).unwrap(), Orientation::Normal);
}

#[test]
fn test_out_of_range_value_reads_as_normal() {
    let reader = OrientationReader::new();
    let mut jpeg = create_jpeg(&[create_exif_segment(&create_orientation_block(ByteOrder::LittleEndian, 9))]);
    std::assert_eq!(reader.read(&mut jpeg).unwrap(), Orientation::Normal);
}

#[test]
fn test_parse_errors_propagate_from_read() {
    let reader = OrientationReader::new();
    let mut cursor = Cursor::new(b"GIF89a".to_vec());
    let error = reader.read(&mut cursor).unwrap_err();

    std::assert!(std::matches!(error, ExifError::NotAJpeg));
    std::assert!(error.is_recoverable());
}

#[test]
fn test_missing_file_is_fatal() {
    let mut reader = OrientationReader::new();
    let error = reader.load_or_default("/nonexistent/glyphcast/missing.jpg").unwrap_err();

    std::assert!(std::matches!(error, ExifError::FileOpen(_)));
    std::assert!(!error.is_recoverable());
    std::assert_eq!(reader.current_file(), Some("/nonexistent/glyphcast/missing.jpg"));
}

#[test]
fn test_inspect_reports_segments_and_entries() {
    let reader = OrientationReader::new();
    let jfif = create_segment(0xE0, b"JFIF\0");
    let exif = create_exif_segment(&create_tiff_block(
        ByteOrder::BigEndian,
        &[(0x010F, 2, 6, 0), (0x0112, 3, 1, 6)],
    ));
    let mut jpeg = create_jpeg(&[jfif, exif]);

    let report = reader.inspect(&mut jpeg);

    std::assert_eq!(report.segments.len(), 2);
    std::assert_eq!(report.byte_order, Some(ByteOrder::BigEndian));
    std::assert_eq!(report.entries.len(), 2);
    std::assert_eq!(report.orientation, Some(Orientation::Rotate90));
    std::assert!(report.errors.is_empty());

    let text = report.to_string();
    std::assert!(text.contains("APP1"));
    std::assert!(text.contains("Big Endian (MM)"));
    std::assert!(text.contains("Orientation: 6"));
}

#[test]
fn test_inspect_keeps_segments_found_before_error() {
    let reader = OrientationReader::new();
    let mut jpeg = create_jpeg(&[create_segment(0xE0, b"JFIF\0")]);
    jpeg.get_mut().extend_from_slice(&[0x00, 0x00]);

    let report = reader.inspect(&mut jpeg);

    std::assert_eq!(report.segments.len(), 1);
    std::assert_eq!(report.errors.len(), 1);
    std::assert!(report.byte_order.is_none());
    std::assert!(report.to_string().contains("Exif: not present"));
}

#[test]
fn test_inspect_records_bad_exif_block() {
    let reader = OrientationReader::new();
    let mut block = create_orientation_block(ByteOrder::LittleEndian, 6);
    block[2] = 0;
    let mut jpeg = create_jpeg(&[create_exif_segment(&block)]);

    let report = reader.inspect(&mut jpeg);

    std::assert_eq!(report.segments.len(), 1);
    std::assert_eq!(report.orientation, None);
    std::assert_eq!(report.errors.len(), 1);
    std::assert!(report.errors[0].contains("Invalid TIFF header"));
}

#[test]
fn test_orientation_codes_round_trip() {
    for value in 1..=8u16 {
        let orientation = Orientation::from_exif(value).unwrap();
        std::assert_eq!(orientation.to_exif(), value);
    }
    std::assert_eq!(Orientation::from_exif(0), None);
    std::assert_eq!(Orientation::from_exif(9), None);
    std::assert_eq!(Orientation::default(), Orientation::Normal);
}

#[test]
fn test_orientation_properties() {
    std::assert!(Orientation::Rotate90.swaps_dimensions());
    std::assert!(Orientation::Transverse.swaps_dimensions());
    std::assert!(!Orientation::Rotate180.swaps_dimensions());
    std::assert!(Orientation::FlipVertical.is_mirrored());
    std::assert!(!Orientation::Rotate270.is_mirrored());
}
