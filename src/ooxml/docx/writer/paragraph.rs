/// Paragraph types and implementation for DOCX documents.
use serde::Serialize;

use super::run::{MutableRun, RunContent};
use super::style::{ResolvedStyle, STYLE_NORMAL};

/// A paragraph in a document.
///
/// Content is only ever appended; paragraphs are never reordered or removed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename = "w:p")]
pub struct MutableParagraph {
    #[serde(rename = "w:pPr", skip_serializing_if = "Option::is_none")]
    pub(crate) properties: Option<ParagraphProperties>,
    #[serde(rename = "w:r", skip_serializing_if = "Vec::is_empty")]
    pub(crate) runs: Vec<MutableRun>,
}

impl MutableParagraph {
    /// An empty paragraph with no runs and no properties.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A new paragraph carrying the style tag of `style`, if it has one.
    pub(crate) fn with_style(style: ResolvedStyle<'_>) -> Self {
        Self {
            properties: style.tag.map(ParagraphProperties::styled),
            runs: Vec::new(),
        }
    }

    /// A paragraph holding a single run.
    pub(crate) fn with_run(run: MutableRun) -> Self {
        Self {
            properties: None,
            runs: vec![run],
        }
    }

    pub(crate) fn push_run(&mut self, run: MutableRun) {
        self.runs.push(run);
    }

    /// Whether a text run with `style` can be appended to this paragraph.
    ///
    /// A paragraph accepts more text when it already has content or an
    /// explicit style, holds no image, and its style matches.
    pub(crate) fn accepts(&self, style: ResolvedStyle<'_>) -> bool {
        let has_content = !self.runs.is_empty() || self.properties.is_some();
        has_content && !self.has_image() && self.style_id() == style.id
    }

    /// Effective style ID; `Normal` when no style is set.
    pub fn style_id(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|p| p.style.as_ref())
            .map_or(STYLE_NORMAL, |s| s.val.as_str())
    }

    /// Whether a `w:pStyle` tag is written for this paragraph.
    pub fn has_style_tag(&self) -> bool {
        self.properties
            .as_ref()
            .is_some_and(|p| p.style.is_some())
    }

    pub fn has_image(&self) -> bool {
        self.runs.iter().any(MutableRun::is_drawing)
    }

    /// Concatenated text of all text runs.
    pub fn text(&self) -> String {
        self.runs.iter().filter_map(MutableRun::get_text).collect()
    }

    pub fn runs(&self) -> &[MutableRun] {
        &self.runs
    }

    /// Number of text runs, excluding breaks and images.
    pub fn text_run_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|r| matches!(r.content(), RunContent::Text(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Paragraph properties (`w:pPr`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ParagraphProperties {
    #[serde(rename = "w:pStyle", skip_serializing_if = "Option::is_none")]
    style: Option<StyleRef>,
}

impl ParagraphProperties {
    fn styled(id: &str) -> Self {
        Self {
            style: Some(StyleRef {
                val: id.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct StyleRef {
    #[serde(rename = "@w:val")]
    val: String,
}
