//! PowerPoint (`.pptx`) writer.
//!
//! Writes a minimal Office Open XML package: one blank master and layout,
//! one slide part per slide, media parts for images and a notes slide for
//! every slide that carries speaker notes.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};
use crate::export::mapper::check_file_name;
use crate::export::instructions::{
    DeckInstructions, DrawingInstruction, Rect, SlideInstructions, TextAlignment, TextStyle,
    VerticalAnchor,
};

/// English Metric Units per inch.
const EMU_PER_INCH: f64 = 914_400.0;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_EXTENDED: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_NOTES_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
const REL_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const EMPTY_GROUP: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

const CLR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;

/// Serializes drawing instructions into a presentation file.
pub trait DeckWriter: Send + Sync {
    /// Render the deck to the bytes of a complete file.
    fn render(&self, deck: &DeckInstructions) -> Result<Vec<u8>>;

    /// Render the deck and write it as `deck.file_name` inside `dir`.
    fn write_to_dir(&self, deck: &DeckInstructions, dir: &Path) -> Result<PathBuf> {
        let file_name = check_file_name(&deck.file_name)?;
        let bytes = self.render(deck)?;
        fs_err::create_dir_all(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
        let path = dir.join(file_name);
        fs_err::write(&path, bytes).map_err(|e| Error::io(e, path.clone()))?;
        tracing::info!(path = %path.display(), slides = deck.slides.len(), "presentation written");
        Ok(path)
    }
}

/// Writes `.pptx` packages.
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    created: Option<DateTime<Utc>>,
}

impl PptxWriter {
    /// Create a writer stamping documents with the current time.
    pub const fn new() -> Self {
        Self { created: None }
    }

    /// Stamp documents with a fixed creation time.
    #[must_use]
    pub fn with_timestamp(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

impl DeckWriter for PptxWriter {
    fn render(&self, deck: &DeckInstructions) -> Result<Vec<u8>> {
        let created = self.created.unwrap_or_else(Utc::now);
        let mut package = Package::new(Cursor::new(Vec::new()));

        let mut slide_parts = Vec::with_capacity(deck.slides.len());
        let mut media_count = 0;
        for (index, slide) in deck.slides.iter().enumerate() {
            let part = SlidePart::build(index, slide, deck, &mut media_count)?;
            slide_parts.push(part);
        }

        package.add("[Content_Types].xml", &content_types(&slide_parts))?;
        package.add("_rels/.rels", &root_rels())?;
        package.add("docProps/core.xml", &core_props(&deck.title, created))?;
        package.add("docProps/app.xml", &app_props(&slide_parts))?;
        package.add("ppt/presentation.xml", &presentation_xml(deck))?;
        package.add("ppt/_rels/presentation.xml.rels", &presentation_rels(deck.slides.len()))?;
        package.add("ppt/slideMasters/slideMaster1.xml", &slide_master(&deck.background))?;
        package.add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &relationships(&[
                ("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                ("rId2", REL_THEME, "../theme/theme1.xml"),
            ]),
        )?;
        package.add("ppt/slideLayouts/slideLayout1.xml", &slide_layout())?;
        package.add(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &relationships(&[("rId1", REL_SLIDE_MASTER, "../slideMasters/slideMaster1.xml")]),
        )?;
        package.add("ppt/theme/theme1.xml", &theme())?;
        package.add("ppt/theme/theme2.xml", &theme())?;
        package.add("ppt/notesMasters/notesMaster1.xml", &notes_master())?;
        package.add(
            "ppt/notesMasters/_rels/notesMaster1.xml.rels",
            &relationships(&[("rId1", REL_THEME, "../theme/theme2.xml")]),
        )?;

        for part in &slide_parts {
            let n = part.number;
            package.add(&format!("ppt/slides/slide{n}.xml"), &part.xml)?;
            package.add(&format!("ppt/slides/_rels/slide{n}.xml.rels"), &part.rels())?;
            if let Some(notes) = &part.notes_xml {
                let slide_target = format!("../slides/slide{n}.xml");
                package.add(&format!("ppt/notesSlides/notesSlide{n}.xml"), notes)?;
                package.add(
                    &format!("ppt/notesSlides/_rels/notesSlide{n}.xml.rels"),
                    &relationships(&[
                        ("rId1", REL_NOTES_MASTER, "../notesMasters/notesMaster1.xml"),
                        ("rId2", REL_SLIDE, slide_target.as_str()),
                    ]),
                )?;
            }
            for media in &part.media {
                package.add_bytes(&format!("ppt/media/{}", media.name), &media.bytes)?;
            }
        }

        let bytes = package.finish()?.into_inner();
        tracing::debug!(bytes = bytes.len(), media = media_count, "pptx package rendered");
        Ok(bytes)
    }
}

/// Thin wrapper over the zip archive.
struct Package<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: FileOptions,
}

impl<W: Write + Seek> Package<W> {
    fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, name: &str, xml: &str) -> Result<()> {
        self.add_bytes(name, xml.as_bytes())
    }

    fn add_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.zip.start_file(name, self.options).map_err(zip_error)?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    fn finish(mut self) -> Result<W> {
        self.zip.finish().map_err(zip_error)
    }
}

fn zip_error(e: zip::result::ZipError) -> Error {
    match e {
        zip::result::ZipError::Io(io) => Error::from(io),
        other => Error::Export(format!("Failed to write package: {other}")),
    }
}

/// An image part referenced from a slide.
struct Media {
    name: String,
    rel_id: String,
    bytes: Vec<u8>,
}

/// One rendered slide with its notes and media.
struct SlidePart {
    number: usize,
    xml: String,
    notes_xml: Option<String>,
    media: Vec<Media>,
}

impl SlidePart {
    fn build(
        index: usize,
        slide: &SlideInstructions,
        deck: &DeckInstructions,
        media_count: &mut usize,
    ) -> Result<Self> {
        let number = index + 1;
        let mut shapes = String::new();
        let mut media = Vec::new();
        // id 1 is the group shape
        let mut shape_id = 2;

        for item in slide.shapes() {
            match item {
                DrawingInstruction::Text { rect, paragraphs, style } => {
                    shapes.push_str(&text_shape(shape_id, *rect, paragraphs, style));
                }
                DrawingInstruction::Image { rect, image, description } => {
                    let bytes = image
                        .decode()
                        .map_err(|e| Error::export_mapping(index, e.to_string()))?;
                    *media_count += 1;
                    let rel_id = format!("rId{}", media.len() + 3);
                    shapes.push_str(&picture_shape(shape_id, *rect, &rel_id, description));
                    media.push(Media {
                        name: format!("image{}.{}", media_count, image.extension()),
                        rel_id,
                        bytes,
                    });
                }
                DrawingInstruction::Notes { .. } => {}
            }
            shape_id += 1;
        }

        let xml = format!(
            r#"{XML_HEADER}<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld>{bg}<p:spTree>{EMPTY_GROUP}{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
            bg = background(&deck.background),
        );

        Ok(Self {
            number,
            xml,
            notes_xml: slide.notes().map(notes_slide),
            media,
        })
    }

    fn rels(&self) -> String {
        let notes_target = format!("../notesSlides/notesSlide{}.xml", self.number);
        let mut rels = vec![("rId1".to_string(), REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml".to_string())];
        if self.notes_xml.is_some() {
            rels.push(("rId2".to_string(), REL_NOTES_SLIDE, notes_target));
        }
        for m in &self.media {
            rels.push((m.rel_id.clone(), REL_IMAGE, format!("../media/{}", m.name)));
        }
        let borrowed: Vec<(&str, &str, &str)> =
            rels.iter().map(|(id, kind, target)| (id.as_str(), *kind, target.as_str())).collect();
        relationships(&borrowed)
    }
}

fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

fn xfrm(rect: Rect) -> String {
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        emu(rect.x),
        emu(rect.y),
        emu(rect.width),
        emu(rect.height)
    )
}

fn solid_fill(color: &str) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, escape(color))
}

fn background(color: &str) -> String {
    format!("<p:bg><p:bgPr>{}<a:effectLst/></p:bgPr></p:bg>", solid_fill(color))
}

fn text_shape(id: usize, rect: Rect, paragraphs: &[String], style: &TextStyle) -> String {
    let fill = style.fill.as_deref().map_or_else(|| "<a:noFill/>".to_string(), solid_fill);
    let anchor = match style.anchor {
        VerticalAnchor::Top => "t",
        VerticalAnchor::Middle => "ctr",
        VerticalAnchor::Bottom => "b",
    };
    let body = if paragraphs.is_empty() {
        r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#.to_string()
    } else {
        paragraphs.iter().map(|p| paragraph(p, style)).collect()
    };

    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{fill}</p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="{anchor}"><a:normAutofit/></a:bodyPr><a:lstStyle/>{body}</p:txBody></p:sp>"#,
        xfrm = xfrm(rect),
    )
}

fn paragraph(text: &str, style: &TextStyle) -> String {
    let align = match style.align {
        TextAlignment::Left => "l",
        TextAlignment::Center => "ctr",
    };
    let ppr = if style.bullets {
        format!(
            r#"<a:pPr marL="285750" indent="-285750" algn="{align}"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#
        )
    } else {
        format!(r#"<a:pPr algn="{align}"><a:buNone/></a:pPr>"#)
    };
    let bold = if style.bold { r#" b="1""# } else { "" };

    format!(
        r#"<a:p>{ppr}<a:r><a:rPr lang="en-US" sz="{size}"{bold} dirty="0">{fill}</a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
        size = style.font_size * 100,
        fill = solid_fill(&style.color),
        text = escape(text),
    )
}

fn picture_shape(id: usize, rect: Rect, rel_id: &str, description: &str) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}" descr="{descr}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
        descr = escape(description),
        xfrm = xfrm(rect),
    )
}

fn notes_slide(text: &str) -> String {
    let body: String = text
        .lines()
        .map(|line| format!(r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#, escape(line)))
        .collect();
    let image_box = xfrm(Rect::new(1.0, 0.75, 5.5, 3.1));
    let notes_box = xfrm(Rect::new(0.75, 4.25, 6.0, 4.5));

    format!(
        r#"{XML_HEADER}<p:notes xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>{EMPTY_GROUP}<p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr><p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr><p:spPr>{image_box}</p:spPr></p:sp><p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr>{notes_box}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>{body}</p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>"#
    )
}

fn relationships(rels: &[(&str, &str, &str)]) -> String {
    let body: String = rels
        .iter()
        .map(|(id, kind, target)| format!(r#"<Relationship Id="{id}" Type="{kind}" Target="{target}"/>"#))
        .collect();
    format!(r#"{XML_HEADER}<Relationships xmlns="{NS_REL}">{body}</Relationships>"#)
}

fn root_rels() -> String {
    relationships(&[
        ("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", REL_CORE, "docProps/core.xml"),
        ("rId3", REL_EXTENDED, "docProps/app.xml"),
    ])
}

fn content_types(slides: &[SlidePart]) -> String {
    let mut overrides = String::new();
    for (part, kind) in [
        ("/ppt/presentation.xml", "presentationml.presentation.main+xml"),
        ("/ppt/slideMasters/slideMaster1.xml", "presentationml.slideMaster+xml"),
        ("/ppt/slideLayouts/slideLayout1.xml", "presentationml.slideLayout+xml"),
        ("/ppt/notesMasters/notesMaster1.xml", "presentationml.notesMaster+xml"),
        ("/ppt/theme/theme1.xml", "theme+xml"),
        ("/ppt/theme/theme2.xml", "theme+xml"),
        ("/docProps/app.xml", "extended-properties+xml"),
    ] {
        overrides.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="application/vnd.openxmlformats-officedocument.{kind}"/>"#
        ));
    }
    overrides.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    for slide in slides {
        let n = slide.number;
        overrides.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
        if slide.notes_xml.is_some() {
            overrides.push_str(&format!(
                r#"<Override PartName="/ppt/notesSlides/notesSlide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml"/>"#
            ));
        }
    }

    format!(
        r#"{XML_HEADER}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/><Default Extension="gif" ContentType="image/gif"/><Default Extension="webp" ContentType="image/webp"/>{overrides}</Types>"#
    )
}

fn core_props(title: &str, created: DateTime<Utc>) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        r#"{XML_HEADER}<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{title}</dc:title><dc:creator>{creator}</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified></cp:coreProperties>"#,
        title = escape(title),
        creator = env!("CARGO_PKG_NAME"),
    )
}

fn app_props(slides: &[SlidePart]) -> String {
    let notes = slides.iter().filter(|s| s.notes_xml.is_some()).count();
    format!(
        r#"{XML_HEADER}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>{app}</Application><PresentationFormat>On-screen Show (16:9)</PresentationFormat><Slides>{count}</Slides><Notes>{notes}</Notes></Properties>"#,
        app = env!("CARGO_PKG_NAME"),
        count = slides.len(),
    )
}

fn presentation_xml(deck: &DeckInstructions) -> String {
    // rId1 master, rId2 notes master, rId3 theme, slides from rId4
    let slide_ids: String = (0..deck.slides.len())
        .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 4))
        .collect();
    let slide_list = if slide_ids.is_empty() {
        String::new()
    } else {
        format!("<p:sldIdLst>{slide_ids}</p:sldIdLst>")
    };

    format!(
        r#"{XML_HEADER}<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:notesMasterIdLst><p:notesMasterId r:id="rId2"/></p:notesMasterIdLst>{slide_list}<p:sldSz cx="{cx}" cy="{cy}"/><p:notesSz cx="6858000" cy="9144000"/><p:defaultTextStyle/></p:presentation>"#,
        cx = emu(deck.width),
        cy = emu(deck.height),
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let targets: Vec<(String, &str, String)> = [
        ("rId1".to_string(), REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml".to_string()),
        ("rId2".to_string(), REL_NOTES_MASTER, "notesMasters/notesMaster1.xml".to_string()),
        ("rId3".to_string(), REL_THEME, "theme/theme1.xml".to_string()),
    ]
    .into_iter()
    .chain((0..slide_count).map(|i| (format!("rId{}", i + 4), REL_SLIDE, format!("slides/slide{}.xml", i + 1))))
    .collect();
    let borrowed: Vec<(&str, &str, &str)> =
        targets.iter().map(|(id, kind, target)| (id.as_str(), *kind, target.as_str())).collect();
    relationships(&borrowed)
}

fn slide_master(background_color: &str) -> String {
    format!(
        r#"{XML_HEADER}<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld>{bg}<p:spTree>{EMPTY_GROUP}</p:spTree></p:cSld><p:clrMap {CLR_MAP}/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles></p:sldMaster>"#,
        bg = background(background_color),
    )
}

fn slide_layout() -> String {
    format!(
        r#"{XML_HEADER}<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree>{EMPTY_GROUP}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
    )
}

fn notes_master() -> String {
    format!(
        r#"{XML_HEADER}<p:notesMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree>{EMPTY_GROUP}</p:spTree></p:cSld><p:clrMap {CLR_MAP}/></p:notesMaster>"#
    )
}

fn theme() -> String {
    let accents: String = ["4472C4", "ED7D31", "A5A5A5", "FFC000", "5B9BD5", "70AD47"]
        .iter()
        .enumerate()
        .map(|(i, c)| format!(r#"<a:accent{n}><a:srgbClr val="{c}"/></a:accent{n}>"#, n = i + 1))
        .collect();
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = format!(r#"<a:ln w="6350">{fill}</a:ln>"#);
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    let font = r#"<a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/>"#;

    format!(
        r#"{XML_HEADER}<a:theme xmlns:a="{NS_A}" name="Slidecraft"><a:themeElements><a:clrScheme name="Slidecraft"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="363636"/></a:dk2><a:lt2><a:srgbClr val="F1F1F1"/></a:lt2>{accents}<a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Slidecraft"><a:majorFont>{font}</a:majorFont><a:minorFont>{font}</a:minorFont></a:fontScheme><a:fmtScheme name="Slidecraft"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{line}{line}{line}</a:lnStyleLst><a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#
    )
}
