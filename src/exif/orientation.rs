//! Exif orientation values

use std::fmt;

/// Display orientation as stored in Exif tag 0x0112
///
/// Each variant describes where row 0 and column 0 of the stored pixels
/// belong on screen; the transform that corrects it is noted per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// 1: stored upright
    #[default]
    Normal,
    /// 2: mirror left to right
    FlipHorizontal,
    /// 3: rotate 180°
    Rotate180,
    /// 4: mirror top to bottom
    FlipVertical,
    /// 5: rotate 90° clockwise, then mirror left to right
    Transpose,
    /// 6: rotate 90° clockwise
    Rotate90,
    /// 7: rotate 270° clockwise, then mirror left to right
    Transverse,
    /// 8: rotate 270° clockwise
    Rotate270,
}

impl Orientation {
    /// Maps a raw tag value to an orientation, `None` outside 1..=8
    pub fn from_exif(value: u16) -> Option<Self> {
        match value {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// The raw tag value for this orientation
    pub fn to_exif(self) -> u16 {
        match self {
            Orientation::Normal => 1,
            Orientation::FlipHorizontal => 2,
            Orientation::Rotate180 => 3,
            Orientation::FlipVertical => 4,
            Orientation::Transpose => 5,
            Orientation::Rotate90 => 6,
            Orientation::Transverse => 7,
            Orientation::Rotate270 => 8,
        }
    }

    /// Whether correcting this orientation swaps width and height
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose | Orientation::Rotate90 | Orientation::Transverse | Orientation::Rotate270
        )
    }

    /// Whether correcting this orientation involves a mirror
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::FlipHorizontal | Orientation::FlipVertical | Orientation::Transpose | Orientation::Transverse
        )
    }

    /// Returns a description of the correcting transform
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Normal => "normal",
            Orientation::FlipHorizontal => "mirror horizontal",
            Orientation::Rotate180 => "rotate 180",
            Orientation::FlipVertical => "mirror vertical",
            Orientation::Transpose => "rotate 90 CW and mirror horizontal",
            Orientation::Rotate90 => "rotate 90 CW",
            Orientation::Transverse => "rotate 270 CW and mirror horizontal",
            Orientation::Rotate270 => "rotate 270 CW",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_exif(), self.name())
    }
}
