/// Word (.docx) document generation.
///
/// Documents are built in memory with [`MutableDocument`] and packaged with
/// [`PackageWriter`].
///
/// # Example
///
/// ```rust,no_run
/// use docx_writer::ooxml::docx::{MutableDocument, PackageWriter, ParagraphStyle, RunFormat};
///
/// let mut doc = MutableDocument::new();
/// doc.add_text(ParagraphStyle::Heading1, "Quarterly Report", RunFormat::empty());
/// doc.add_text(None, "Revenue grew ", RunFormat::empty());
/// doc.add_text(None, "12%", RunFormat::BOLD);
/// doc.add_new_line();
/// doc.add_image_file("chart.png")?;
///
/// PackageWriter::new().write_to_path("report.docx", &doc)?;
/// # Ok::<(), docx_writer::DocxError>(())
/// ```
pub mod format;
pub mod writer;

pub use format::ImageFormat;
pub use writer::{
    DocumentParts, MutableDocument, MutableParagraph, MutableRun, PackageWriter, ParagraphStyle,
    RunContent, RunFormat, SectionProperties, WriterOptions,
};
