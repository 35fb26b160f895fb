//! PresentationML part bodies.

use std::fmt::Write;

use super::{Block, Slide};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// 16:9 slide size in EMUs.
pub const SLIDE_WIDTH: i64 = 12_192_000;
pub const SLIDE_HEIGHT: i64 = 6_858_000;

const MARGIN: i64 = 457_200;
const TITLE_TOP: i64 = 365_760;
const TITLE_HEIGHT: i64 = 1_005_840;
const BODY_TOP: i64 = 1_554_480;
const TABLE_ROW_HEIGHT: i64 = 370_840;

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // Not allowed in XML 1.0: control characters other than tab and newline, and
            // the noncharacters U+FFFE and U+FFFF
            c if c.is_control() && c != '\t' && c != '\n' => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// A relationship entry in a `.rels` part.
pub struct Relationship {
    pub id: String,
    pub kind: &'static str,
    pub target: String,
}

impl Relationship {
    pub fn new(id: impl Into<String>, kind: &'static str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            target: target.into(),
        }
    }
}

pub fn relationships(entries: &[Relationship]) -> String {
    let mut xml = format!(r#"{XML_DECLARATION}<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">"#);
    for entry in entries {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}/{}" Target="{}"/>"#,
            entry.id, REL_TYPE_BASE, entry.kind, entry.target
        );
    }
    xml.push_str("</Relationships>");
    xml
}

pub fn content_types(slide_count: usize) -> String {
    let mut xml = format!(
        concat!(
            r#"{}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
            r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
            r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
            r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
        ),
        XML_DECLARATION
    );
    for number in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{number}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str("</Types>");
    xml
}

/// Presentation part. Relationship `rId1` is the master and slides start at `rId3`.
pub fn presentation(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECLARATION}<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_MAIN}" saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>"#
    );
    for index in 0..slide_count {
        let _ = write!(
            xml,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + index,
            index + 3
        );
    }
    let _ = write!(
        xml,
        r#"</p:sldIdLst><p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}"/><p:notesSz cx="{SLIDE_HEIGHT}" cy="9144000"/></p:presentation>"#
    );
    xml
}

fn empty_shape_tree() -> &'static str {
    concat!(
        r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
        r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    )
}

pub fn slide_master() -> String {
    format!(
        concat!(
            r#"{}<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
            r#"<p:spTree>{}</p:spTree></p:cSld>"#,
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" "#,
            r#"hlink="hlink" folHlink="folHlink"/>"#,
            r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
            r#"</p:sldMaster>"#,
        ),
        XML_DECLARATION,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_MAIN,
        empty_shape_tree()
    )
}

pub fn slide_layout() -> String {
    format!(
        concat!(
            r#"{}<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">"#,
            r#"<p:cSld name="Blank"><p:spTree>{}</p:spTree></p:cSld>"#,
            r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        ),
        XML_DECLARATION,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_MAIN,
        empty_shape_tree()
    )
}

pub fn theme() -> String {
    let solid = |color: &str| format!(r#"<a:solidFill><a:schemeClr val="{color}"/></a:solidFill>"#);
    let line = |width: u32| {
        format!(
            r#"<a:ln w="{width}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#
        )
    };
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    let placeholder_fill = solid("phClr");

    format!(
        concat!(
            r#"{decl}<a:theme xmlns:a="{ns}" name="Compass">"#,
            r#"<a:themeElements><a:clrScheme name="Compass">"#,
            r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
            r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
            r#"<a:dk2><a:srgbClr val="1F3864"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
            r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#,
            r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
            r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
            r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
            r#"</a:clrScheme><a:fontScheme name="Compass">"#,
            r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
            r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
            r#"</a:fontScheme><a:fmtScheme name="Compass">"#,
            r#"<a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>"#,
            r#"<a:lnStyleLst>{thin}{medium}{thick}</a:lnStyleLst>"#,
            r#"<a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>"#,
            r#"<a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>"#,
            r#"</a:fmtScheme></a:themeElements></a:theme>"#,
        ),
        decl = XML_DECLARATION,
        ns = NS_DRAWING,
        fill = placeholder_fill,
        thin = line(6350),
        medium = line(12700),
        thick = line(19050),
        effect = effect,
    )
}

/// Slide part for one slide.
pub fn slide(slide: &Slide) -> String {
    let mut shapes = String::new();
    let mut next_id: u32 = 2;

    let (title_top, title_size, align) = if slide.cover {
        (SLIDE_HEIGHT / 3, 4000, Some("ctr"))
    } else {
        (TITLE_TOP, 3200, None)
    };
    let title = paragraph(&run(&slide.title, title_size, RunStyle::Bold), ParagraphKind::Plain, align);
    text_shape(
        &mut shapes,
        next_id,
        "Title",
        (MARGIN, title_top, SLIDE_WIDTH - 2 * MARGIN, TITLE_HEIGHT),
        &title,
    );
    next_id += 1;

    let mut top = if slide.cover {
        title_top + TITLE_HEIGHT
    } else {
        BODY_TOP
    };
    let body_height = SLIDE_HEIGHT - top - MARGIN;

    let mut paragraphs = String::new();
    for block in &slide.body {
        match block {
            Block::Paragraph(text) => {
                paragraphs.push_str(&paragraph(
                    &run(text, 2000, RunStyle::Plain),
                    ParagraphKind::Plain,
                    align,
                ));
            }
            Block::Bullets(items) => {
                for item in items {
                    paragraphs.push_str(&paragraph(
                        &run(item, 2000, RunStyle::Plain),
                        ParagraphKind::Bullet,
                        None,
                    ));
                }
            }
            Block::Numbered(items) => {
                for item in items {
                    paragraphs.push_str(&paragraph(
                        &run(item, 2000, RunStyle::Plain),
                        ParagraphKind::Numbered,
                        None,
                    ));
                }
            }
            Block::Placeholder(text) => {
                paragraphs.push_str(&paragraph(
                    &run(text, 1800, RunStyle::Italic),
                    ParagraphKind::Plain,
                    None,
                ));
            }
            Block::Table { header, rows } => {
                flush_body(&mut shapes, &mut next_id, &mut paragraphs, top, body_height);
                let height = TABLE_ROW_HEIGHT * (rows.len() as i64 + 1);
                table_frame(&mut shapes, next_id, top, header, rows);
                next_id += 1;
                top += height;
            }
        }
    }
    flush_body(&mut shapes, &mut next_id, &mut paragraphs, top, body_height);

    format!(
        concat!(
            r#"{}<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            r#"<p:cSld><p:spTree>{}{}</p:spTree></p:cSld>"#,
            r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        ),
        XML_DECLARATION,
        NS_DRAWING,
        NS_RELATIONSHIPS,
        NS_MAIN,
        empty_shape_tree(),
        shapes
    )
}

/// Emits pending paragraphs as a text box.
fn flush_body(shapes: &mut String, next_id: &mut u32, paragraphs: &mut String, top: i64, height: i64) {
    if paragraphs.is_empty() {
        return;
    }

    text_shape(
        shapes,
        *next_id,
        "Content",
        (MARGIN, top, SLIDE_WIDTH - 2 * MARGIN, height.max(TABLE_ROW_HEIGHT)),
        paragraphs,
    );
    *next_id += 1;
    paragraphs.clear();
}

fn text_shape(shapes: &mut String, id: u32, name: &str, rect: (i64, i64, i64, i64), paragraphs: &str) {
    let (x, y, cx, cy) = rect;
    let _ = write!(
        shapes,
        concat!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{} {}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
            r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
            r#"<p:txBody><a:bodyPr wrap="square"><a:normAutofit/></a:bodyPr><a:lstStyle/>{}</p:txBody></p:sp>"#,
        ),
        id, name, id, x, y, cx, cy, paragraphs
    );
}

fn table_frame(shapes: &mut String, id: u32, top: i64, header: &[&str], rows: &[Vec<String>]) {
    let width = SLIDE_WIDTH - 2 * MARGIN;
    // First column holds the objective title and gets half the width
    let columns = header.len().max(1) as i64;
    let first = if columns > 1 { width / 2 } else { width };
    let rest = if columns > 1 { (width - first) / (columns - 1) } else { 0 };

    let mut grid = String::new();
    for index in 0..columns {
        let _ = write!(
            grid,
            r#"<a:gridCol w="{}"/>"#,
            if index == 0 { first } else { rest }
        );
    }

    let mut table_rows = String::new();
    table_row(&mut table_rows, header.iter().copied(), RunStyle::Bold);
    for row in rows {
        table_row(&mut table_rows, row.iter().map(String::as_str), RunStyle::Plain);
    }

    let height = TABLE_ROW_HEIGHT * (rows.len() as i64 + 1);
    let _ = write!(
        shapes,
        concat!(
            r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{}" name="Table {}"/>"#,
            r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr>"#,
            r#"<p:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></p:xfrm>"#,
            r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
            r#"<a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>{}</a:tblGrid>{}</a:tbl>"#,
            r#"</a:graphicData></a:graphic></p:graphicFrame>"#,
        ),
        id, id, MARGIN, top, width, height, grid, table_rows
    );
}

fn table_row<'a>(xml: &mut String, cells: impl Iterator<Item = &'a str>, style: RunStyle) {
    let _ = write!(xml, r#"<a:tr h="{TABLE_ROW_HEIGHT}">"#);
    for cell in cells {
        let _ = write!(
            xml,
            r#"<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>{}</a:txBody><a:tcPr/></a:tc>"#,
            paragraph(&run(cell, 1400, style), ParagraphKind::Plain, None)
        );
    }
    xml.push_str("</a:tr>");
}

#[derive(Clone, Copy)]
enum RunStyle {
    Plain,
    Bold,
    Italic,
}

#[derive(Clone, Copy)]
enum ParagraphKind {
    Plain,
    Bullet,
    Numbered,
}

/// Text run; `size` is in hundredths of a point.
fn run(text: &str, size: u32, style: RunStyle) -> String {
    let emphasis = match style {
        RunStyle::Plain => "",
        RunStyle::Bold => r#" b="1""#,
        RunStyle::Italic => r#" i="1""#,
    };

    format!(
        r#"<a:r><a:rPr lang="en-US" sz="{}"{} dirty="0"/><a:t>{}</a:t></a:r>"#,
        size,
        emphasis,
        escape(text)
    )
}

fn paragraph(runs: &str, kind: ParagraphKind, align: Option<&str>) -> String {
    let align = align.map(|a| format!(r#" algn="{a}""#)).unwrap_or_default();
    let properties = match kind {
        ParagraphKind::Plain => format!("<a:pPr{align}/>"),
        ParagraphKind::Bullet => format!(
            r#"<a:pPr marL="342900" indent="-342900"{align}><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#
        ),
        ParagraphKind::Numbered => format!(
            r#"<a:pPr marL="457200" indent="-457200"{align}><a:buAutoNum type="arabicPeriod"/></a:pPr>"#
        ),
    };

    format!("<a:p>{properties}{runs}</a:p>")
}
