/// Section properties: page size, margins and grid of the document body.
use serde::{Deserialize, Serialize};

use crate::common::unit::inches_to_twips;

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Section properties including page setup and margins.
///
/// All lengths are in twips (twentieths of a point, 1440 per inch). The
/// type derives serde so callers can load page geometry from their own
/// configuration files; missing fields take the US Letter defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProperties {
    /// Page width
    pub page_width: u32,
    /// Page height
    pub page_height: u32,
    pub orientation: PageOrientation,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    /// Header distance from the top edge
    pub header_distance: u32,
    /// Footer distance from the bottom edge
    pub footer_distance: u32,
    pub gutter: u32,
    /// Space between text columns
    pub column_spacing: u32,
    /// Document grid line pitch
    pub line_pitch: u32,
}

impl Default for SectionProperties {
    fn default() -> Self {
        // US Letter size: 8.5" x 11" = 12240 x 15840 twips
        Self {
            page_width: 12240,
            page_height: 15840,
            orientation: PageOrientation::Portrait,
            margin_top: 1440,     // 1 inch
            margin_right: 1440,   // 1 inch
            margin_bottom: 1440,  // 1 inch
            margin_left: 1440,    // 1 inch
            header_distance: 720, // 0.5 inch
            footer_distance: 720, // 0.5 inch
            gutter: 0,
            column_spacing: 720,
            line_pitch: 360,
        }
    }
}

impl SectionProperties {
    /// Create US Letter page size (8.5" x 11").
    pub fn letter() -> Self {
        Self::default()
    }

    /// Create A4 page size (210mm x 297mm).
    pub fn a4() -> Self {
        Self {
            page_width: 11906,
            page_height: 16838,
            ..Default::default()
        }
    }

    /// Set page to landscape orientation.
    pub fn landscape(mut self) -> Self {
        if self.orientation == PageOrientation::Portrait {
            self.orientation = PageOrientation::Landscape;
            std::mem::swap(&mut self.page_width, &mut self.page_height);
        }
        self
    }

    /// Set margins (all in inches).
    pub fn margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = inches_to_twips(top);
        self.margin_right = inches_to_twips(right);
        self.margin_bottom = inches_to_twips(bottom);
        self.margin_left = inches_to_twips(left);
        self
    }

    /// The `w:sectPr` element for these properties.
    pub(crate) fn to_element(&self) -> SectPr {
        SectPr {
            page_size: PageSize {
                width: self.page_width,
                height: self.page_height,
                orient: (self.orientation == PageOrientation::Landscape)
                    .then(|| self.orientation.as_str()),
            },
            page_margins: PageMargins {
                top: self.margin_top,
                right: self.margin_right,
                bottom: self.margin_bottom,
                left: self.margin_left,
                header: self.header_distance,
                footer: self.footer_distance,
                gutter: self.gutter,
            },
            columns: Columns {
                space: self.column_spacing,
            },
            doc_grid: DocGrid {
                line_pitch: self.line_pitch,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SectPr {
    #[serde(rename = "w:pgSz")]
    page_size: PageSize,
    #[serde(rename = "w:pgMar")]
    page_margins: PageMargins,
    #[serde(rename = "w:cols")]
    columns: Columns,
    #[serde(rename = "w:docGrid")]
    doc_grid: DocGrid,
}

#[derive(Debug, Serialize)]
struct PageSize {
    #[serde(rename = "@w:w")]
    width: u32,
    #[serde(rename = "@w:h")]
    height: u32,
    #[serde(rename = "@w:orient", skip_serializing_if = "Option::is_none")]
    orient: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct PageMargins {
    #[serde(rename = "@w:top")]
    top: u32,
    #[serde(rename = "@w:right")]
    right: u32,
    #[serde(rename = "@w:bottom")]
    bottom: u32,
    #[serde(rename = "@w:left")]
    left: u32,
    #[serde(rename = "@w:header")]
    header: u32,
    #[serde(rename = "@w:footer")]
    footer: u32,
    #[serde(rename = "@w:gutter")]
    gutter: u32,
}

#[derive(Debug, Serialize)]
struct Columns {
    #[serde(rename = "@w:space")]
    space: u32,
}

#[derive(Debug, Serialize)]
struct DocGrid {
    #[serde(rename = "@w:linePitch")]
    line_pitch: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sect_pr_xml(props: &SectionProperties) -> String {
        #[derive(Serialize)]
        #[serde(rename = "w:body")]
        struct Body {
            #[serde(rename = "w:sectPr")]
            sect_pr: SectPr,
        }
        quick_xml::se::to_string(&Body {
            sect_pr: props.to_element(),
        })
        .unwrap()
    }

    #[test]
    fn test_default_section_xml() {
        let xml = sect_pr_xml(&SectionProperties::default());
        assert!(xml.contains(
            r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/><w:cols w:space="720"/><w:docGrid w:linePitch="360"/></w:sectPr>"#
        ));
    }

    #[test]
    fn test_landscape_swaps_and_tags() {
        let props = SectionProperties::a4().landscape();
        assert_eq!((props.page_width, props.page_height), (16838, 11906));

        // Idempotent
        let again = props.clone().landscape();
        assert_eq!(again, props);

        let xml = sect_pr_xml(&props);
        assert!(xml.contains(r#"<w:pgSz w:w="16838" w:h="11906" w:orient="landscape"/>"#));
    }

    #[test]
    fn test_margins_in_inches() {
        let props = SectionProperties::letter().margins(0.5, 1.0, 0.75, 1.25);
        assert_eq!(props.margin_top, 720);
        assert_eq!(props.margin_right, 1440);
        assert_eq!(props.margin_bottom, 1080);
        assert_eq!(props.margin_left, 1800);
    }

    #[test]
    fn test_missing_config_fields_use_defaults() {
        use serde::de::value::{Error as ValueError, MapDeserializer};

        let entries = vec![("page_width", 11906u32), ("page_height", 16838u32)];
        let de: MapDeserializer<'_, _, ValueError> = MapDeserializer::new(entries.into_iter());
        let props = SectionProperties::deserialize(de).unwrap();

        assert_eq!(props, SectionProperties::a4());
    }
}
