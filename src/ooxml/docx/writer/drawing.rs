//! Inline picture markup (`w:drawing`).
//!
//! Everything in the subtree is a structural constant except the size, the
//! drawing ID/name and the relationship ID of the embedded image.

use crate::common::xml::Empty;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::rel::RelId;
use serde::Serialize;

/// Description written on every inserted picture.
pub const PICTURE_DESCRIPTION: &str = "Inserted Picture";

/// An inline drawing holding one picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drawing {
    #[serde(rename = "wp:inline")]
    inline: Inline,
}

impl Drawing {
    /// Build the inline picture subtree for an embedded image.
    ///
    /// # Arguments
    /// * `image_id` - Drawing object ID, unique within the document
    /// * `file_name` - Media file name, e.g. `image1.png`
    /// * `rel_id` - Relationship ID that resolves to the media part
    /// * `width_emu` - Width in EMUs
    /// * `height_emu` - Height in EMUs
    pub fn inline_picture(
        image_id: u32,
        file_name: &str,
        rel_id: RelId,
        width_emu: i64,
        height_emu: i64,
    ) -> Self {
        let size = Extent {
            cx: width_emu,
            cy: height_emu,
        };

        Self {
            inline: Inline {
                dist_t: 0,
                dist_b: 0,
                dist_l: 0,
                dist_r: 0,
                extent: size,
                effect_extent: EffectExtent::default(),
                doc_pr: NonVisualProps {
                    id: image_id,
                    name: format!("Picture {image_id}"),
                    descr: PICTURE_DESCRIPTION,
                },
                graphic_frame_pr: GraphicFrameProps {
                    locks: GraphicFrameLocks { no_change_aspect: 1 },
                },
                graphic: Graphic {
                    data: GraphicData {
                        uri: namespace::DML_PICTURE,
                        pic: Picture {
                            nv_pic_pr: NonVisualPictureProps {
                                c_nv_pr: NonVisualProps {
                                    id: image_id,
                                    name: file_name.to_string(),
                                    descr: PICTURE_DESCRIPTION,
                                },
                                c_nv_pic_pr: PictureProps {
                                    locks: PictureLocks {
                                        no_change_aspect: 1,
                                        no_change_arrowheads: 1,
                                    },
                                },
                            },
                            blip_fill: BlipFill {
                                blip: Blip {
                                    embed: rel_id,
                                    cstate: "print",
                                },
                                src_rect: Some(Empty),
                                stretch: Stretch { fill_rect: Empty },
                            },
                            sp_pr: ShapeProps {
                                bw_mode: "auto",
                                xfrm: Transform {
                                    off: Offset { x: 0, y: 0 },
                                    ext: size,
                                },
                                prst_geom: PresetGeometry {
                                    prst: "rect",
                                    av_lst: Empty,
                                },
                                no_fill: Some(Empty),
                                ln: Some(Outline {
                                    no_fill: Some(Empty),
                                }),
                            },
                        },
                    },
                },
            },
        }
    }

    /// Size in EMUs as `(width, height)`.
    pub fn extent(&self) -> (i64, i64) {
        (self.inline.extent.cx, self.inline.extent.cy)
    }

    /// Relationship ID of the embedded image.
    pub fn embed(&self) -> RelId {
        self.inline.graphic.data.pic.blip_fill.blip.embed
    }

    /// Drawing object ID (`wp:docPr/@id`).
    pub fn id(&self) -> u32 {
        self.inline.doc_pr.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Inline {
    #[serde(rename = "@distT")]
    dist_t: u32,
    #[serde(rename = "@distB")]
    dist_b: u32,
    #[serde(rename = "@distL")]
    dist_l: u32,
    #[serde(rename = "@distR")]
    dist_r: u32,
    #[serde(rename = "wp:extent")]
    extent: Extent,
    #[serde(rename = "wp:effectExtent")]
    effect_extent: EffectExtent,
    #[serde(rename = "wp:docPr")]
    doc_pr: NonVisualProps,
    #[serde(rename = "wp:cNvGraphicFramePr")]
    graphic_frame_pr: GraphicFrameProps,
    #[serde(rename = "a:graphic")]
    graphic: Graphic,
}

/// `wp:extent` and `a:ext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct Extent {
    #[serde(rename = "@cx")]
    cx: i64,
    #[serde(rename = "@cy")]
    cy: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
struct EffectExtent {
    #[serde(rename = "@l")]
    l: i64,
    #[serde(rename = "@t")]
    t: i64,
    #[serde(rename = "@r")]
    r: i64,
    #[serde(rename = "@b")]
    b: i64,
}

/// `wp:docPr` and `pic:cNvPr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct NonVisualProps {
    #[serde(rename = "@id")]
    id: u32,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@descr")]
    descr: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GraphicFrameProps {
    #[serde(rename = "a:graphicFrameLocks")]
    locks: GraphicFrameLocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GraphicFrameLocks {
    #[serde(rename = "@noChangeAspect")]
    no_change_aspect: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Graphic {
    #[serde(rename = "a:graphicData")]
    data: GraphicData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct GraphicData {
    #[serde(rename = "@uri")]
    uri: &'static str,
    #[serde(rename = "pic:pic")]
    pic: Picture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Picture {
    #[serde(rename = "pic:nvPicPr")]
    nv_pic_pr: NonVisualPictureProps,
    #[serde(rename = "pic:blipFill")]
    blip_fill: BlipFill,
    #[serde(rename = "pic:spPr")]
    sp_pr: ShapeProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct NonVisualPictureProps {
    #[serde(rename = "pic:cNvPr")]
    c_nv_pr: NonVisualProps,
    #[serde(rename = "pic:cNvPicPr")]
    c_nv_pic_pr: PictureProps,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PictureProps {
    #[serde(rename = "a:picLocks")]
    locks: PictureLocks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PictureLocks {
    #[serde(rename = "@noChangeAspect")]
    no_change_aspect: u8,
    #[serde(rename = "@noChangeArrowheads")]
    no_change_arrowheads: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct BlipFill {
    #[serde(rename = "a:blip")]
    blip: Blip,
    #[serde(rename = "a:srcRect", skip_serializing_if = "Option::is_none")]
    src_rect: Option<Empty>,
    #[serde(rename = "a:stretch")]
    stretch: Stretch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Blip {
    #[serde(rename = "@r:embed")]
    embed: RelId,
    #[serde(rename = "@cstate")]
    cstate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Stretch {
    #[serde(rename = "a:fillRect")]
    fill_rect: Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ShapeProps {
    #[serde(rename = "@bwMode")]
    bw_mode: &'static str,
    #[serde(rename = "a:xfrm")]
    xfrm: Transform,
    #[serde(rename = "a:prstGeom")]
    prst_geom: PresetGeometry,
    #[serde(rename = "a:noFill", skip_serializing_if = "Option::is_none")]
    no_fill: Option<Empty>,
    #[serde(rename = "a:ln", skip_serializing_if = "Option::is_none")]
    ln: Option<Outline>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Transform {
    #[serde(rename = "a:off")]
    off: Offset,
    #[serde(rename = "a:ext")]
    ext: Extent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Offset {
    #[serde(rename = "@x")]
    x: i64,
    #[serde(rename = "@y")]
    y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PresetGeometry {
    #[serde(rename = "@prst")]
    prst: &'static str,
    #[serde(rename = "a:avLst")]
    av_lst: Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Outline {
    #[serde(rename = "a:noFill", skip_serializing_if = "Option::is_none")]
    no_fill: Option<Empty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing_xml(drawing: &Drawing) -> String {
        #[derive(Serialize)]
        #[serde(rename = "w:r")]
        struct Wrapper<'a> {
            #[serde(rename = "w:drawing")]
            drawing: &'a Drawing,
        }
        quick_xml::se::to_string(&Wrapper { drawing }).unwrap()
    }

    #[test]
    fn test_size_and_identity() {
        let drawing = Drawing::inline_picture(3, "image3.png", RelId::new(4), 952_500, 476_250);

        assert_eq!(drawing.extent(), (952_500, 476_250));
        assert_eq!(drawing.embed(), RelId::new(4));
        assert_eq!(drawing.id(), 3);
    }

    #[test]
    fn test_inline_picture_xml() {
        let drawing = Drawing::inline_picture(1, "image1.png", RelId::new(2), 952_500, 476_250);
        let xml = drawing_xml(&drawing);

        assert!(xml.contains(r#"<wp:inline distT="0" distB="0" distL="0" distR="0">"#));
        assert!(xml.contains(r#"<wp:extent cx="952500" cy="476250"/>"#));
        assert!(xml.contains(r#"<wp:effectExtent l="0" t="0" r="0" b="0"/>"#));
        assert!(xml.contains(r#"<wp:docPr id="1" name="Picture 1" descr="Inserted Picture"/>"#));
        assert!(xml.contains(r#"<a:graphicFrameLocks noChangeAspect="1"/>"#));
        assert!(xml.contains(
            r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">"#
        ));
        assert!(xml.contains(r#"<pic:cNvPr id="1" name="image1.png" descr="Inserted Picture"/>"#));
        assert!(xml.contains(r#"<a:picLocks noChangeAspect="1" noChangeArrowheads="1"/>"#));
        assert!(xml.contains(r#"<a:blip r:embed="rId2" cstate="print"/>"#));
        assert!(xml.contains("<a:srcRect/>"));
        assert!(xml.contains("<a:stretch><a:fillRect/></a:stretch>"));
        assert!(xml.contains(r#"<pic:spPr bwMode="auto">"#));
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="952500" cy="476250"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#));
        assert!(xml.contains("<a:noFill/><a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_element_order() {
        let xml = drawing_xml(&Drawing::inline_picture(1, "image1.gif", RelId::new(2), 1, 1));
        let order = [
            "<wp:extent",
            "<wp:effectExtent",
            "<wp:docPr",
            "<wp:cNvGraphicFramePr",
            "<a:graphic>",
            "<pic:nvPicPr",
            "<pic:blipFill",
            "<pic:spPr",
        ];
        let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
