//! Tests for the Exif orientation parser

mod segment_tests;
mod reader_tests;
