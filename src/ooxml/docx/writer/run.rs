/// Run types and implementation for DOCX documents.
use crate::common::xml::Empty;
use bitflags::bitflags;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::drawing::Drawing;

bitflags! {
    /// Character formatting applied to a text run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RunFormat: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
    }
}

/// Run content type. A run holds exactly one of these.
#[derive(Debug, Clone)]
pub enum RunContent {
    /// Text, written with `xml:space="preserve"`
    Text(String),
    /// Inline line break
    Break,
    /// Inline picture
    Drawing(Box<Drawing>),
}

/// A run: the smallest styleable unit of paragraph content.
///
/// Runs are immutable once created and owned by their paragraph.
#[derive(Debug, Clone)]
pub struct MutableRun {
    pub(crate) content: RunContent,
    pub(crate) properties: Option<RunProperties>,
}

impl MutableRun {
    pub(crate) fn text(text: &str, format: RunFormat) -> Self {
        Self {
            content: RunContent::Text(text.to_string()),
            properties: RunProperties::from_format(format),
        }
    }

    pub(crate) fn line_break() -> Self {
        Self {
            content: RunContent::Break,
            properties: None,
        }
    }

    pub(crate) fn drawing(drawing: Drawing) -> Self {
        Self {
            content: RunContent::Drawing(Box::new(drawing)),
            properties: None,
        }
    }

    pub fn content(&self) -> &RunContent {
        &self.content
    }

    /// Get the text content, if this is a text run.
    pub fn get_text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Formatting applied to this run.
    pub fn format(&self) -> RunFormat {
        self.properties
            .as_ref()
            .map_or(RunFormat::empty(), RunProperties::format)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.content, RunContent::Drawing(_))
    }
}

impl Serialize for MutableRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.properties.is_some());
        let mut run = serializer.serialize_struct("w:r", len)?;

        // w:rPr must come first
        match &self.properties {
            Some(props) => run.serialize_field("w:rPr", props)?,
            None => run.skip_field("w:rPr")?,
        }

        match &self.content {
            RunContent::Text(text) => run.serialize_field("w:t", &TextElement::preserve(text))?,
            RunContent::Break => run.serialize_field("w:br", &Empty)?,
            RunContent::Drawing(drawing) => run.serialize_field("w:drawing", drawing.as_ref())?,
        }

        run.end()
    }
}

/// `<w:t>` with whitespace preserved.
#[derive(serde::Serialize)]
struct TextElement<'a> {
    #[serde(rename = "@xml:space")]
    space: &'static str,
    #[serde(rename = "$text")]
    text: &'a str,
}

impl<'a> TextElement<'a> {
    fn preserve(text: &'a str) -> Self {
        Self {
            space: "preserve",
            text,
        }
    }
}

/// Run properties (`w:rPr`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub(crate) struct RunProperties {
    #[serde(rename = "w:b", skip_serializing_if = "Option::is_none")]
    bold: Option<Empty>,
    #[serde(rename = "w:i", skip_serializing_if = "Option::is_none")]
    italic: Option<Empty>,
}

impl RunProperties {
    /// `None` when no formatting is requested, so no empty `w:rPr` is emitted.
    pub(crate) fn from_format(format: RunFormat) -> Option<Self> {
        if format.is_empty() {
            return None;
        }
        Some(Self {
            bold: Empty::when(format.contains(RunFormat::BOLD)),
            italic: Empty::when(format.contains(RunFormat::ITALIC)),
        })
    }

    pub(crate) fn format(&self) -> RunFormat {
        let mut format = RunFormat::empty();
        format.set(RunFormat::BOLD, self.bold.is_some());
        format.set(RunFormat::ITALIC, self.italic.is_some());
        format
    }
}
