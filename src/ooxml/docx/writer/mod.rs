//! Writer components for DOCX documents.
//!
//! [`MutableDocument`] accumulates content; [`PackageWriter`] turns it into a
//! `.docx` container.

pub mod doc;
pub mod drawing;
pub mod image;
pub mod package;
pub mod paragraph;
pub mod run;
pub mod section;
pub mod style;

// Re-export main document type
pub use doc::MutableDocument;

// Re-export drawing types
pub use drawing::Drawing;

// Re-export image types
pub use image::{DecodedImage, ImageDecoder, ImageFormat, ImageRecord, RasterDecoder};

// Re-export package types
pub use package::{DocumentParts, PackageWriter, WriterOptions};

// Re-export paragraph types
pub use paragraph::MutableParagraph;

// Re-export run types
pub use run::{MutableRun, RunContent, RunFormat};

// Re-export section types
pub use section::{PageOrientation, SectionProperties};

// Re-export style types
pub use style::{DEFAULT_STYLES_XML, ParagraphStyle};
