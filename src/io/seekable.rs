//! Seekable reader trait and implementations
//!
//! The JPEG segment scanner needs to both read segment headers and skip
//! over segment bodies, so it works against this combined trait.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
///
/// Implemented for files, buffered files and in-memory cursors alike.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
