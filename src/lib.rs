//! docx-writer - build Word (.docx) documents from Rust
//!
//! Documents are assembled in memory from styled text runs, blank lines and
//! images, then written out as an Office Open XML package.
//!
//! # Features
//!
//! - **Paragraph merging**: consecutive text with the same style shares a paragraph
//! - **Headings**: `Heading1` to `Heading4` plus custom style IDs
//! - **Images**: JPEG, PNG and GIF, embedded inline at their pixel size
//! - **Packaging**: deterministic part order, deflated or stored entries
//!
//! # Example
//!
//! ```no_run
//! use docx_writer::{MutableDocument, PackageWriter, ParagraphStyle, RunFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = MutableDocument::new();
//! doc.add_text(ParagraphStyle::Heading1, "Document Title", RunFormat::ITALIC);
//! doc.add_text(ParagraphStyle::Normal, "Plain text, ", RunFormat::empty());
//! doc.add_text(ParagraphStyle::Normal, "then bold.", RunFormat::BOLD);
//! doc.add_new_line();
//! doc.add_image_file("logo.png")?;
//!
//! PackageWriter::new().write_to_path("output.docx", &doc)?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod ooxml;

pub use ooxml::docx::writer::{
    DocumentParts, ImageDecoder, ImageFormat, MutableDocument, PackageWriter, ParagraphStyle,
    RasterDecoder, RunFormat, SectionProperties, WriterOptions,
};
pub use ooxml::error::{DocxError, Result};
pub use ooxml::opc::Compression;
