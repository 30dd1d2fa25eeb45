/// Document writer implementation for DOCX.
use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, trace};
use serde::Serialize;

use crate::common::id::IdCounter;
use crate::common::xml::to_xml_document;
use crate::ooxml::error::{DocxError, Result};
use crate::ooxml::opc::constants::{namespace, part_name, relationship_type};
use crate::ooxml::opc::rel::{RelId, Relationship};

use super::drawing::Drawing;
use super::image::{ImageDecoder, ImageRecord, RasterDecoder};
use super::paragraph::MutableParagraph;
use super::run::{MutableRun, RunFormat};
use super::section::{SectPr, SectionProperties};
use super::style::{ParagraphStyle, resolve};

/// First drawing object ID handed out.
const FIRST_IMAGE_ID: u32 = 1;
/// First relationship ID handed out; `rId1` belongs to the style sheet.
const FIRST_REL_ID: u32 = 2;

/// A Word document under construction.
///
/// Content is appended through [`add_text`](Self::add_text),
/// [`add_new_line`](Self::add_new_line) and [`add_image`](Self::add_image).
/// Consecutive text with the same paragraph style lands in the same
/// paragraph; everything else starts a new one.
///
/// # Examples
///
/// ```
/// use docx_writer::{MutableDocument, ParagraphStyle, RunFormat};
///
/// let mut doc = MutableDocument::new();
/// doc.add_text(ParagraphStyle::Heading1, "Title", RunFormat::empty());
/// doc.add_text(None, "Body", RunFormat::empty());
/// doc.add_text(None, " more", RunFormat::BOLD);
///
/// assert_eq!(doc.paragraph_count(), 2);
/// assert_eq!(doc.paragraphs()[1].text(), "Body more");
/// ```
#[derive(Debug, Clone)]
pub struct MutableDocument {
    /// Body paragraphs in document order
    paragraphs: Vec<MutableParagraph>,
    /// Embedded images in insertion order
    images: Vec<ImageRecord>,
    /// Relationships from the main document to its images
    image_rels: Vec<Relationship>,
    /// Drawing object IDs
    image_ids: IdCounter,
    /// Relationship IDs, shared by every relationship kind
    rel_ids: IdCounter,
    /// Section properties (page setup, margins, grid)
    section: SectionProperties,
}

impl MutableDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            images: Vec::new(),
            image_rels: Vec::new(),
            image_ids: IdCounter::starting_at(FIRST_IMAGE_ID),
            rel_ids: IdCounter::starting_at(FIRST_REL_ID),
            section: SectionProperties::default(),
        }
    }

    /// Create an empty document with the given page setup.
    pub fn with_section(section: SectionProperties) -> Self {
        Self {
            section,
            ..Self::new()
        }
    }

    /// Append a text run.
    ///
    /// The run joins the last paragraph when that paragraph already has
    /// content or an explicit style, holds no image, and has the same
    /// style as the one requested (no style counts as `Normal`). Otherwise
    /// a new paragraph is started.
    ///
    /// # Arguments
    /// * `style` - Paragraph style, or `None` for the default
    /// * `text` - Run text; whitespace is preserved
    /// * `format` - Character formatting of the run
    pub fn add_text(
        &mut self,
        style: impl Into<Option<ParagraphStyle>>,
        text: &str,
        format: RunFormat,
    ) {
        let style = style.into();
        let resolved = resolve(style.as_ref());
        let run = MutableRun::text(text, format);
        let count = self.paragraphs.len();

        if let Some(last) = self.paragraphs.last_mut()
            && last.accepts(resolved)
        {
            trace!("appending run to paragraph {} ({})", count - 1, resolved.id);
            last.push_run(run);
            return;
        }

        trace!("starting paragraph {} ({})", count, resolved.id);
        let mut paragraph = MutableParagraph::with_style(resolved);
        paragraph.push_run(run);
        self.paragraphs.push(paragraph);
    }

    /// Append an empty paragraph.
    ///
    /// The next [`add_text`](Self::add_text) always starts a new paragraph.
    pub fn add_new_line(&mut self) {
        self.paragraphs.push(MutableParagraph::new());
    }

    /// Append a line break (`w:br`) without ending the paragraph.
    ///
    /// The break goes into the last paragraph if it holds text; otherwise a
    /// new untagged paragraph is started for it.
    pub fn add_break(&mut self) {
        if let Some(last) = self.paragraphs.last_mut()
            && !last.is_empty()
            && !last.has_image()
        {
            last.push_run(MutableRun::line_break());
            return;
        }
        self.paragraphs
            .push(MutableParagraph::with_run(MutableRun::line_break()));
    }

    /// Embed an image in a paragraph of its own.
    ///
    /// The image is displayed at its pixel size (96 DPI).
    ///
    /// # Errors
    /// [`DocxError::UnsupportedFormat`] for images other than JPEG, PNG and
    /// GIF, and [`DocxError::DecodeFailure`] for data that is not an image.
    /// On error the document is left unchanged.
    pub fn add_image(&mut self, data: impl Into<Vec<u8>>) -> Result<()> {
        self.add_image_with(&RasterDecoder, data)
    }

    /// Embed an image, probing it with a caller-supplied decoder.
    pub fn add_image_with<D>(&mut self, decoder: &D, data: impl Into<Vec<u8>>) -> Result<()>
    where
        D: ImageDecoder + ?Sized,
    {
        let data = data.into();
        let decoded = decoder.decode(&data)?;

        let image_id = self.image_ids.allocate();
        let rel_id = RelId::new(self.rel_ids.allocate());
        let record = ImageRecord::new(image_id, rel_id, decoded, data);
        let (width_emu, height_emu) = record.size_emu();

        debug!(
            "adding image {} as {} ({}x{} px, {})",
            record.file_name(),
            rel_id,
            decoded.width,
            decoded.height,
            decoded.format
        );

        let drawing =
            Drawing::inline_picture(image_id, record.file_name(), rel_id, width_emu, height_emu);
        self.image_rels.push(Relationship::new(
            rel_id,
            relationship_type::IMAGE,
            record.target(),
        ));
        self.images.push(record);
        self.paragraphs
            .push(MutableParagraph::with_run(MutableRun::drawing(drawing)));
        Ok(())
    }

    /// Read an image file and embed it with [`add_image`](Self::add_image).
    pub fn add_image_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| DocxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_image(data)
    }

    /// Body paragraphs in document order.
    pub fn paragraphs(&self) -> &[MutableParagraph] {
        &self.paragraphs
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Embedded images in insertion order.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Content type to file extension, one entry per distinct image format.
    pub fn image_content_types(&self) -> BTreeMap<&'static str, &'static str> {
        self.images
            .iter()
            .map(|image| (image.format().content_type(), image.format().extension()))
            .collect()
    }

    /// Image relationships in allocation order.
    pub fn image_relationships(&self) -> &[Relationship] {
        &self.image_rels
    }

    /// Get a reference to the section properties.
    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Get a mutable reference to the section properties.
    pub fn section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    /// Render `word/document.xml`.
    pub fn to_xml(&self) -> Result<String> {
        let root = DocumentRoot {
            xmlns_wp: namespace::DML_WORDPROCESSING_DRAWING,
            xmlns_a: namespace::DML_MAIN,
            xmlns_pic: namespace::DML_PICTURE,
            xmlns_r: namespace::OFC_RELATIONSHIPS,
            xmlns_w: namespace::WML_MAIN,
            body: Body {
                paragraphs: &self.paragraphs,
                sect_pr: self.section.to_element(),
            },
        };

        to_xml_document(&root).map_err(|message| DocxError::Serialization {
            part: part_name::DOCUMENT.to_string(),
            message,
        })
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename = "w:document")]
struct DocumentRoot<'a> {
    #[serde(rename = "@xmlns:wp")]
    xmlns_wp: &'static str,
    #[serde(rename = "@xmlns:a")]
    xmlns_a: &'static str,
    #[serde(rename = "@xmlns:pic")]
    xmlns_pic: &'static str,
    #[serde(rename = "@xmlns:r")]
    xmlns_r: &'static str,
    #[serde(rename = "@xmlns:w")]
    xmlns_w: &'static str,
    #[serde(rename = "w:body")]
    body: Body<'a>,
}

#[derive(Serialize)]
struct Body<'a> {
    #[serde(rename = "w:p")]
    paragraphs: &'a [MutableParagraph],
    #[serde(rename = "w:sectPr")]
    sect_pr: SectPr,
}
