//! I/O utilities for metadata parsing
//!
//! This module provides the seekable stream abstraction used by the JPEG
//! segment scanner and the slice-based byte order readers used by the TIFF
//! directory decoder.

pub mod seekable;
pub mod byte_order;
