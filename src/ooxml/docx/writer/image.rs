/// Image support for DOCX documents.
use std::io::Cursor;

use crate::common::unit::px_to_emu;
use crate::ooxml::error::{DocxError, Result};
use crate::ooxml::opc::constants::part_name;
use crate::ooxml::opc::rel::RelId;

// Import shared format types
pub use super::super::format::ImageFormat;

/// Pixel size and format of an image payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Probe image bytes for their format and pixel dimensions.
///
/// Implementations must fail with [`DocxError::UnsupportedFormat`] when the
/// bytes are a recognized image in a format other than JPEG, PNG or GIF, and
/// with [`DocxError::DecodeFailure`] when they cannot be parsed at all.
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage>;
}

/// Default decoder, backed by the `image` crate.
///
/// Only the image header is read; pixel data is never decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDecoder;

impl ImageDecoder for RasterDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DocxError::DecodeFailure(e.to_string()))?;

        let format = match reader.format() {
            Some(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
            Some(image::ImageFormat::Png) => ImageFormat::Png,
            Some(image::ImageFormat::Gif) => ImageFormat::Gif,
            Some(other) => return Err(DocxError::UnsupportedFormat(format!("{other:?}"))),
            None => {
                return Err(DocxError::DecodeFailure(
                    "unrecognized image signature".to_string(),
                ));
            },
        };

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| DocxError::DecodeFailure(e.to_string()))?;

        Ok(DecodedImage {
            width,
            height,
            format,
        })
    }
}

/// An image embedded in a document.
///
/// Records are created by a successful image insertion and never change
/// afterwards.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub(crate) id: u32,
    pub(crate) rel_id: RelId,
    pub(crate) file_name: String,
    pub(crate) format: ImageFormat,
    pub(crate) width_px: u32,
    pub(crate) height_px: u32,
    pub(crate) data: Vec<u8>,
}

impl ImageRecord {
    pub(crate) fn new(id: u32, rel_id: RelId, decoded: DecodedImage, data: Vec<u8>) -> Self {
        Self {
            id,
            rel_id,
            file_name: format!("image{id}.{}", decoded.format.extension()),
            format: decoded.format,
            width_px: decoded.width,
            height_px: decoded.height,
            data,
        }
    }

    /// Sequential image ID, starting at 1.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Relationship ID that embeds this image.
    pub fn rel_id(&self) -> RelId {
        self.rel_id
    }

    /// Media file name, `image<ID>.<ext>`.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel size as `(width, height)`.
    pub fn size_px(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Size in EMUs as `(width, height)`, at 96 DPI.
    pub fn size_emu(&self) -> (i64, i64) {
        (px_to_emu(self.width_px), px_to_emu(self.height_px))
    }

    /// Zip entry name of the media part, e.g. `word/media/image1.png`.
    pub fn media_path(&self) -> String {
        format!("{}{}", part_name::MEDIA_DIR, self.file_name)
    }

    /// Relationship target relative to the main document, e.g. `media/image1.png`.
    pub fn target(&self) -> String {
        format!("{}{}", part_name::MEDIA_TARGET_DIR, self.file_name)
    }
}
