//! Serializes laid-out pages into a PDF with lopdf.
//!
//! Layout works in millimetres from the top-left; PDF user space is points from
//! the bottom-left, so every coordinate is converted here and nowhere else.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::render::encoding::encode_line;
use crate::render::font_metrics::{Font, MM_PER_PT};
use crate::render::layout::{DrawOp, LaidOutPage, Rect, TextRun, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::render::photo::EmbeddedPhoto;
use crate::render::RenderError;

pub const PHOTO_RESOURCE: &str = "Im0";
const PRODUCER: &str = "resume-api";

fn pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Converts a distance from the page top (mm) to a PDF y coordinate (pt).
fn y_from_top(mm: f32) -> f32 {
    pt(PAGE_HEIGHT_MM - mm)
}

/// Builds and serializes the document. `title` lands in the Info dictionary.
pub fn write_pdf(
    pages: &[LaidOutPage],
    photo: Option<&EmbeddedPhoto>,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let fonts = dictionary! {
        Font::Helvetica.resource_name() => font_dictionary(Font::Helvetica),
        Font::HelveticaBold.resource_name() => font_dictionary(Font::HelveticaBold),
    };

    let photo_id = photo.map(|photo| {
        doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => photo.width_px as i64,
                "Height" => photo.height_px as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            photo.jpeg.clone(),
        ))
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = write_page(&mut doc, pages_id, &fonts, photo_id, page)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_line(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Serialize(e.to_string()))?;
    Ok(bytes)
}

fn font_dictionary(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn write_page(
    doc: &mut Document,
    pages_id: ObjectId,
    fonts: &Dictionary,
    photo_id: Option<ObjectId>,
    page: &LaidOutPage,
) -> Result<ObjectId, RenderError> {
    let mut operations = Vec::new();
    for op in &page.ops {
        match op {
            DrawOp::Text(run) => push_text(&mut operations, run),
            // A photo op without an embedded image has nothing to draw.
            DrawOp::Photo(rect) => {
                if photo_id.is_some() {
                    push_photo(&mut operations, rect);
                }
            }
        }
    }

    let content = Content { operations }
        .encode()
        .map_err(|e| RenderError::Content(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    let mut resources = dictionary! { "Font" => fonts.clone() };
    if let Some(photo_id) = photo_id {
        if page.has_photo() {
            resources.set("XObject", dictionary! { PHOTO_RESOURCE => photo_id });
        }
    }

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        pt(PAGE_WIDTH_MM).into(),
        pt(PAGE_HEIGHT_MM).into(),
    ];
    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => media_box,
        "Resources" => resources,
        "Contents" => content_id,
    }))
}

fn push_text(operations: &mut Vec<Operation>, run: &TextRun) {
    let [r, g, b] = run.color.to_unit();
    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new(
        "Tf",
        vec![run.font.resource_name().into(), run.size_pt.into()],
    ));
    operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
    operations.push(Operation::new(
        "Td",
        vec![pt(run.x).into(), y_from_top(run.baseline).into()],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(encode_line(&run.text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn push_photo(operations: &mut Vec<Operation>, rect: &Rect) {
    operations.push(Operation::new("q", vec![]));
    operations.push(Operation::new(
        "cm",
        vec![
            pt(rect.width).into(),
            0.into(),
            0.into(),
            pt(rect.height).into(),
            pt(rect.x).into(),
            y_from_top(rect.bottom()).into(),
        ],
    ));
    operations.push(Operation::new("Do", vec![PHOTO_RESOURCE.into()]));
    operations.push(Operation::new("Q", vec![]));
}
