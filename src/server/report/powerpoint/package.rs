//! Office Open XML packaging for decks.

use std::io::{Cursor, Write};

use tokio_util::sync::CancellationToken;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::server::{
    error::{report::ReportError, Error},
    report::powerpoint::{
        xml::{self, Relationship},
        Slide,
    },
};

/// Renders slides into a `.pptx` document.
///
/// Returns [`ReportError::Cancelled`] if `cancel` fires between slides.
pub fn render_deck(slides: &[Slide], cancel: &CancellationToken) -> Result<Vec<u8>, Error> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let add = |zip: &mut ZipWriter<Cursor<Vec<u8>>>, name: &str, body: String| {
        write_part(zip, name, &body, options)
    };

    add(&mut zip, "[Content_Types].xml", xml::content_types(slides.len()))?;
    add(
        &mut zip,
        "_rels/.rels",
        xml::relationships(&[Relationship::new(
            "rId1",
            "officeDocument",
            "ppt/presentation.xml",
        )]),
    )?;

    let mut presentation_rels = vec![
        Relationship::new("rId1", "slideMaster", "slideMasters/slideMaster1.xml"),
        Relationship::new("rId2", "theme", "theme/theme1.xml"),
    ];
    presentation_rels.extend((1..=slides.len()).map(|number| {
        Relationship::new(
            format!("rId{}", number + 2),
            "slide",
            format!("slides/slide{number}.xml"),
        )
    }));
    add(&mut zip, "ppt/presentation.xml", xml::presentation(slides.len()))?;
    add(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        xml::relationships(&presentation_rels),
    )?;

    add(&mut zip, "ppt/slideMasters/slideMaster1.xml", xml::slide_master())?;
    add(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        xml::relationships(&[
            Relationship::new("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml"),
            Relationship::new("rId2", "theme", "../theme/theme1.xml"),
        ]),
    )?;
    add(&mut zip, "ppt/slideLayouts/slideLayout1.xml", xml::slide_layout())?;
    add(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        xml::relationships(&[Relationship::new(
            "rId1",
            "slideMaster",
            "../slideMasters/slideMaster1.xml",
        )]),
    )?;
    add(&mut zip, "ppt/theme/theme1.xml", xml::theme())?;

    let slide_rels = xml::relationships(&[Relationship::new(
        "rId1",
        "slideLayout",
        "../slideLayouts/slideLayout1.xml",
    )]);
    for (number, slide) in (1..).zip(slides) {
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled.into());
        }

        add(&mut zip, &format!("ppt/slides/slide{number}.xml"), xml::slide(slide))?;
        add(
            &mut zip,
            &format!("ppt/slides/_rels/slide{number}.xml.rels"),
            slide_rels.clone(),
        )?;
    }

    if cancel.is_cancelled() {
        return Err(ReportError::Cancelled.into());
    }

    Ok(zip.finish()?.into_inner())
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    body: &str,
    options: SimpleFileOptions,
) -> Result<(), Error> {
    zip.start_file(name, options)?;
    zip.write_all(body.as_bytes())?;

    Ok(())
}
