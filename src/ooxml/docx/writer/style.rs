/// Paragraph styles and the default style sheet for generated documents.
use std::fmt;

/// Style ID of the default paragraph style.
pub const STYLE_NORMAL: &str = "Normal";
pub const STYLE_HEADING_1: &str = "Heading1";
pub const STYLE_HEADING_2: &str = "Heading2";
pub const STYLE_HEADING_3: &str = "Heading3";
pub const STYLE_HEADING_4: &str = "Heading4";

/// The static style sheet written to `word/styles.xml`.
///
/// Defines `Normal`, `Heading1`..`Heading4` and their linked character
/// styles. Custom style IDs used in a document are not checked against it.
pub const DEFAULT_STYLES_XML: &str = include_str!("default_styles.xml");

/// A paragraph style reference.
///
/// `Custom` IDs are emitted verbatim. A document may reference a style that
/// the style sheet does not define; Word then falls back to `Normal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    Normal,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Custom(String),
}

impl ParagraphStyle {
    /// Parse a style ID.
    ///
    /// Returns `None` for an empty or whitespace-only ID, which callers
    /// treat the same as passing no style at all.
    pub fn from_id(id: &str) -> Option<Self> {
        let style = match id {
            STYLE_NORMAL => Self::Normal,
            STYLE_HEADING_1 => Self::Heading1,
            STYLE_HEADING_2 => Self::Heading2,
            STYLE_HEADING_3 => Self::Heading3,
            STYLE_HEADING_4 => Self::Heading4,
            _ if id.trim().is_empty() => return None,
            _ => Self::Custom(id.to_string()),
        };
        Some(style)
    }

    /// Heading style for a level between 1 and 4.
    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Heading1),
            2 => Some(Self::Heading2),
            3 => Some(Self::Heading3),
            4 => Some(Self::Heading4),
            _ => None,
        }
    }

    /// The `w:styleId` this style refers to.
    pub fn style_id(&self) -> &str {
        match self {
            Self::Normal => STYLE_NORMAL,
            Self::Heading1 => STYLE_HEADING_1,
            Self::Heading2 => STYLE_HEADING_2,
            Self::Heading3 => STYLE_HEADING_3,
            Self::Heading4 => STYLE_HEADING_4,
            Self::Custom(id) => id,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            Self::Heading1 | Self::Heading2 | Self::Heading3 | Self::Heading4
        )
    }

    /// Whether the default style sheet defines this style.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ParagraphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_id())
    }
}

/// A requested style after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedStyle<'a> {
    /// Style ID used for merge comparisons; never blank
    pub(crate) id: &'a str,
    /// Style ID to emit as `w:pStyle`, if any
    pub(crate) tag: Option<&'a str>,
}

/// Normalize a requested paragraph style.
///
/// No style, or a blank custom ID, resolves to `Normal` without a style tag.
/// An explicit `Normal`, every heading and every non-blank custom ID get a
/// tag, so that an untouched document stays free of `w:pPr` elements.
pub(crate) fn resolve(requested: Option<&ParagraphStyle>) -> ResolvedStyle<'_> {
    match requested {
        Some(ParagraphStyle::Custom(id)) if id.trim().is_empty() => ResolvedStyle {
            id: STYLE_NORMAL,
            tag: None,
        },
        Some(style) => ResolvedStyle {
            id: style.style_id(),
            tag: Some(style.style_id()),
        },
        None => ResolvedStyle {
            id: STYLE_NORMAL,
            tag: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(ParagraphStyle::from_id("Normal"), Some(ParagraphStyle::Normal));
        assert_eq!(
            ParagraphStyle::from_id("Heading3"),
            Some(ParagraphStyle::Heading3)
        );
        assert_eq!(
            ParagraphStyle::from_id("Quote"),
            Some(ParagraphStyle::Custom("Quote".to_string()))
        );
        assert_eq!(ParagraphStyle::from_id(""), None);
        assert_eq!(ParagraphStyle::from_id("   "), None);
    }

    #[test]
    fn test_heading_levels_are_closed() {
        assert_eq!(ParagraphStyle::heading(1), Some(ParagraphStyle::Heading1));
        assert_eq!(ParagraphStyle::heading(4), Some(ParagraphStyle::Heading4));
        assert_eq!(ParagraphStyle::heading(0), None);
        assert_eq!(ParagraphStyle::heading(5), None);
        // Heading5 is just a custom ID
        assert!(!ParagraphStyle::from_id("Heading5").unwrap().is_heading());
    }

    #[test]
    fn test_resolve_tags() {
        assert_eq!(
            resolve(None),
            ResolvedStyle {
                id: "Normal",
                tag: None
            }
        );
        assert_eq!(resolve(Some(&ParagraphStyle::Normal)).tag, Some("Normal"));
        assert_eq!(resolve(Some(&ParagraphStyle::Heading2)).tag, Some("Heading2"));

        let blank = ParagraphStyle::Custom("  ".to_string());
        assert_eq!(
            resolve(Some(&blank)),
            ResolvedStyle {
                id: "Normal",
                tag: None
            }
        );

        let custom = ParagraphStyle::Custom("Caption".to_string());
        assert_eq!(resolve(Some(&custom)).id, "Caption");
        assert_eq!(resolve(Some(&custom)).tag, Some("Caption"));
    }

    #[test]
    fn test_default_sheet_defines_builtin_styles() {
        for style in [
            ParagraphStyle::Normal,
            ParagraphStyle::Heading1,
            ParagraphStyle::Heading2,
            ParagraphStyle::Heading3,
            ParagraphStyle::Heading4,
        ] {
            assert!(style.is_builtin());
            let needle = format!(r#"w:styleId="{}""#, style.style_id());
            assert!(DEFAULT_STYLES_XML.contains(&needle), "missing {style}");
        }
        assert!(DEFAULT_STYLES_XML.starts_with("<?xml"));
    }
}
