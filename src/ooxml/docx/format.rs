/// Shared format types for DOCX documents.
use crate::ooxml::opc::constants::content_type as ct;
use std::fmt;

/// Raster image formats that can be embedded in a document.
///
/// The set is closed: each format maps to exactly one content type and one
/// file extension, which is what ends up in the media file name and the
/// content-type manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
}

impl ImageFormat {
    /// Get file extension for this format (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }

    /// Get MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => ct::JPEG,
            Self::Png => ct::PNG,
            Self::Gif => ct::GIF,
        }
    }

    /// Look up a format by file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
        };
        f.write_str(name)
    }
}
