//! Package writer for Word documents.
//!
//! Turns a finished document into a `.docx` container. Parts are written in
//! a fixed order:
//!
//! 1. `[Content_Types].xml`
//! 2. `_rels/.rels`
//! 3. `word/_rels/document.xml.rels`
//! 4. `word/styles.xml`
//! 5. `word/media/*`, one entry per image
//! 6. `word/document.xml`
//!
//! The first failure stops the write. Entries already written stay in the
//! output, which must then be discarded.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::xml::to_xml_document;
use crate::ooxml::error::{DocxError, Result};
use crate::ooxml::opc::constants::{content_type as ct, part_name, relationship_type as rt};
use crate::ooxml::opc::content_types::ContentTypes;
use crate::ooxml::opc::phys_pkg::{Compression, PhysPkgWriter};
use crate::ooxml::opc::rel::{RelId, Relationship, Relationships};

use super::doc::MutableDocument;
use super::image::ImageRecord;
use super::style::DEFAULT_STYLES_XML;

/// What the package writer needs from a document.
pub trait DocumentParts {
    /// The serialized `word/document.xml`.
    fn document_xml(&self) -> Result<String>;

    /// Images to store under `word/media/`, in relationship order.
    fn images(&self) -> &[ImageRecord];

    /// Content type to extension, one entry per distinct image format.
    fn image_content_types(&self) -> BTreeMap<&'static str, &'static str>;

    /// Relationships from the main document to its images.
    fn image_relationships(&self) -> &[Relationship];
}

impl DocumentParts for MutableDocument {
    fn document_xml(&self) -> Result<String> {
        self.to_xml()
    }

    fn images(&self) -> &[ImageRecord] {
        MutableDocument::images(self)
    }

    fn image_content_types(&self) -> BTreeMap<&'static str, &'static str> {
        MutableDocument::image_content_types(self)
    }

    fn image_relationships(&self) -> &[Relationship] {
        MutableDocument::image_relationships(self)
    }
}

/// Options for writing packages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Compression applied to every entry
    pub compression: Compression,
}

/// Writes documents as `.docx` packages.
///
/// # Example
///
/// ```no_run
/// use docx_writer::{MutableDocument, PackageWriter, ParagraphStyle, RunFormat};
///
/// let mut doc = MutableDocument::new();
/// doc.add_text(ParagraphStyle::Heading1, "Report", RunFormat::empty());
/// PackageWriter::new().write_to_path("report.docx", &doc)?;
/// # Ok::<(), docx_writer::DocxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackageWriter {
    options: WriterOptions,
    styles: Cow<'static, str>,
}

impl PackageWriter {
    /// A writer using the default style sheet and deflate compression.
    pub fn new() -> Self {
        Self::with_options(WriterOptions::default())
    }

    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            options,
            styles: Cow::Borrowed(DEFAULT_STYLES_XML),
        }
    }

    /// Replace the style sheet written to `word/styles.xml`.
    ///
    /// The markup is stored verbatim. Style IDs used by the document are
    /// not checked against it.
    pub fn with_styles(mut self, styles: impl Into<Cow<'static, str>>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// The style sheet that will be written.
    pub fn styles(&self) -> &str {
        &self.styles
    }

    /// Write a document to a file, creating or truncating it.
    pub fn write_to_path<P, D>(&self, path: P, document: &D) -> Result<()>
    where
        P: AsRef<Path>,
        D: DocumentParts + ?Sized,
    {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| DocxError::packaging(path.display().to_string(), e))?;
        let mut file = self.write_to(file, document)?;
        file.flush()
            .map_err(|e| DocxError::packaging(path.display().to_string(), e))?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// Write a document to a stream and return the stream.
    pub fn write_to<W, D>(&self, writer: W, document: &D) -> Result<W>
    where
        W: Write + Seek,
        D: DocumentParts + ?Sized,
    {
        let mut pkg = PhysPkgWriter::new(writer, self.options.compression);
        self.write_parts(&mut pkg, document)?;
        pkg.finish()
    }

    /// Serialize a document to an in-memory package.
    pub fn to_bytes<D: DocumentParts + ?Sized>(&self, document: &D) -> Result<Vec<u8>> {
        let mut pkg = PhysPkgWriter::in_memory(self.options.compression);
        self.write_parts(&mut pkg, document)?;
        Ok(pkg.finish()?.into_inner())
    }

    fn write_parts<W, D>(&self, pkg: &mut PhysPkgWriter<W>, document: &D) -> Result<()>
    where
        W: Write + Seek,
        D: DocumentParts + ?Sized,
    {
        debug!(
            "writing package: {} images, compression {:?}",
            document.images().len(),
            self.options.compression
        );

        write_xml(pkg, part_name::CONTENT_TYPES, &content_types(document))?;
        write_xml(pkg, part_name::PACKAGE_RELS, &package_rels())?;
        write_xml(pkg, part_name::DOCUMENT_RELS, &document_rels(document))?;
        pkg.write(part_name::STYLES, self.styles.as_bytes())?;

        for image in document.images() {
            pkg.write(&image.media_path(), image.data())?;
        }

        let body = document
            .document_xml()
            .map_err(|e| DocxError::packaging(part_name::DOCUMENT, e))?;
        pkg.write(part_name::DOCUMENT, body.as_bytes())
    }
}

impl Default for PackageWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn content_types<D: DocumentParts + ?Sized>(document: &D) -> ContentTypes {
    let mut cti = ContentTypes::new();
    cti.add_override(&part_name::absolute(part_name::DOCUMENT), ct::WML_DOCUMENT_MAIN);
    cti.add_override(&part_name::absolute(part_name::STYLES), ct::WML_STYLES);
    for (content_type, extension) in document.image_content_types() {
        cti.add_default(extension, content_type);
    }
    cti
}

fn package_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.push(Relationship::new(
        RelId::RESERVED,
        rt::OFFICE_DOCUMENT,
        part_name::DOCUMENT,
    ));
    rels
}

fn document_rels<D: DocumentParts + ?Sized>(document: &D) -> Relationships {
    let mut rels = Relationships::new();
    rels.push(Relationship::new(
        RelId::RESERVED,
        rt::STYLES,
        part_name::STYLES_TARGET,
    ));
    rels.extend(document.image_relationships().iter().cloned());
    rels
}

fn write_xml<W, T>(pkg: &mut PhysPkgWriter<W>, part: &str, root: &T) -> Result<()>
where
    W: Write + Seek,
    T: Serialize,
{
    let xml = to_xml_document(root).map_err(|message| {
        DocxError::packaging(part, DocxError::Serialization {
            part: part.to_string(),
            message,
        })
    })?;
    pkg.write(part, xml.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::writer::image::test_images;
    use crate::ooxml::docx::writer::run::RunFormat;
    use crate::ooxml::docx::writer::style::ParagraphStyle;
    use std::error::Error as _;
    use std::io::{Cursor, Read};

    fn open(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
        zip::ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    fn entry_names(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>) -> Vec<String> {
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    fn read_string(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn sample_document() -> MutableDocument {
        let mut doc = MutableDocument::new();
        doc.add_text(ParagraphStyle::Heading1, "Title", RunFormat::ITALIC);
        doc.add_text(ParagraphStyle::Normal, "Body", RunFormat::empty());
        doc.add_image(test_images::png(100, 50)).unwrap();
        doc.add_image(test_images::png(10, 10)).unwrap();
        doc.add_image(test_images::jpeg(8, 8)).unwrap();
        doc
    }

    #[test]
    fn test_part_order() {
        let bytes = PackageWriter::new().to_bytes(&sample_document()).unwrap();
        let mut archive = open(bytes);

        assert_eq!(entry_names(&mut archive), [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/media/image1.png",
            "word/media/image2.png",
            "word/media/image3.jpg",
            "word/document.xml",
        ]);
    }

    #[test]
    fn test_content_types() {
        let bytes = PackageWriter::new().to_bytes(&sample_document()).unwrap();
        let xml = read_string(&mut open(bytes), "[Content_Types].xml");

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Default Extension="xml" ContentType="application/xml"/>"#));
        assert_eq!(xml.matches(r#"Extension="png""#).count(), 1);
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Default Extension="jpg" ContentType="image/jpeg"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#));
    }

    #[test]
    fn test_relationships() {
        let bytes = PackageWriter::new().to_bytes(&sample_document()).unwrap();
        let mut archive = open(bytes);

        let pkg_rels = read_string(&mut archive, "_rels/.rels");
        assert_eq!(pkg_rels.matches("<Relationship ").count(), 1);
        assert!(pkg_rels.contains(r#"Id="rId1""#));
        assert!(pkg_rels.contains(r#"Target="word/document.xml""#));

        let doc_rels = read_string(&mut archive, "word/_rels/document.xml.rels");
        let styles = doc_rels.find(r#"Id="rId1""#).unwrap();
        let first = doc_rels.find(r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>"#).unwrap();
        let second = doc_rels.find(r#"Id="rId3""#).unwrap();
        let third = doc_rels.find(r#"Target="media/image3.jpg""#).unwrap();
        assert!(styles < first && first < second && second < third);
        assert!(doc_rels.contains(r#"Target="styles.xml""#));
    }

    #[test]
    fn test_media_and_styles_are_verbatim() {
        let doc = sample_document();
        let bytes = PackageWriter::new().to_bytes(&doc).unwrap();
        let mut archive = open(bytes);

        let mut media = Vec::new();
        archive
            .by_name("word/media/image1.png")
            .unwrap()
            .read_to_end(&mut media)
            .unwrap();
        assert_eq!(media, doc.images()[0].data());

        assert_eq!(read_string(&mut archive, "word/styles.xml"), DEFAULT_STYLES_XML);
        assert_eq!(read_string(&mut archive, "word/document.xml"), doc.to_xml().unwrap());
    }

    #[test]
    fn test_text_only_document() {
        let mut doc = MutableDocument::new();
        doc.add_text(None, "Hello", RunFormat::empty());
        let bytes = PackageWriter::new().to_bytes(&doc).unwrap();
        let mut archive = open(bytes);

        assert_eq!(archive.len(), 5);
        let xml = read_string(&mut archive, "[Content_Types].xml");
        assert_eq!(xml.matches("<Default ").count(), 2);
        let doc_rels = read_string(&mut archive, "word/_rels/document.xml.rels");
        assert_eq!(doc_rels.matches("<Relationship ").count(), 1);
    }

    #[test]
    fn test_custom_styles_and_stored_compression() {
        let styles = r#"<?xml version="1.0"?><w:styles xmlns:w="urn:test"/>"#;
        let writer = PackageWriter::with_options(WriterOptions {
            compression: Compression::Stored,
        })
        .with_styles(styles);
        assert_eq!(writer.styles(), styles);

        let bytes = writer.to_bytes(&MutableDocument::new()).unwrap();
        let mut archive = open(bytes);
        assert_eq!(read_string(&mut archive, "word/styles.xml"), styles);
        assert_eq!(
            archive.by_name("word/document.xml").unwrap().compression(),
            zip::CompressionMethod::Stored
        );
    }

    #[test]
    fn test_default_compression_is_deflate() {
        let bytes = PackageWriter::default().to_bytes(&sample_document()).unwrap();
        let mut archive = open(bytes);
        assert_eq!(
            archive.by_name("word/document.xml").unwrap().compression(),
            zip::CompressionMethod::Deflated
        );
    }

    #[test]
    fn test_write_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        PackageWriter::new()
            .write_to_path(&path, &sample_document())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mut archive = open(bytes);
        assert!(read_string(&mut archive, "word/document.xml").contains("Body"));
    }

    #[test]
    fn test_write_to_path_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let err = PackageWriter::new()
            .write_to_path(&path, &MutableDocument::new())
            .unwrap_err();
        assert!(err.is_packaging());
    }

    #[test]
    fn test_write_to_stream() {
        let cursor = PackageWriter::new()
            .write_to(Cursor::new(Vec::new()), &sample_document())
            .unwrap();
        let archive = open(cursor.into_inner());
        assert_eq!(archive.len(), 8);
    }

    struct BrokenBody;

    impl DocumentParts for BrokenBody {
        fn document_xml(&self) -> Result<String> {
            Err(DocxError::Serialization {
                part: part_name::DOCUMENT.to_string(),
                message: "invalid element name".to_string(),
            })
        }

        fn images(&self) -> &[ImageRecord] {
            &[]
        }

        fn image_content_types(&self) -> BTreeMap<&'static str, &'static str> {
            BTreeMap::new()
        }

        fn image_relationships(&self) -> &[Relationship] {
            &[]
        }
    }

    #[test]
    fn test_serialization_failure_aborts_write() {
        let err = PackageWriter::new().to_bytes(&BrokenBody).unwrap_err();

        match &err {
            DocxError::Packaging { part, .. } => assert_eq!(part, "word/document.xml"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.source().unwrap().to_string().contains("invalid element name"));
    }

    #[test]
    fn test_options_from_config() {
        use serde::de::value::{Error as ValueError, MapDeserializer};

        let de: MapDeserializer<'_, _, ValueError> =
            MapDeserializer::new(vec![("compression", "stored")].into_iter());
        let options = WriterOptions::deserialize(de).unwrap();
        assert_eq!(options.compression, Compression::Stored);
    }
}
