//! Slide pages and document assembly

use crate::constants::{PDF_PRODUCER, px_to_pt};
use crate::types::{CarouselError, Result};
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::xobject::create_image_xobject;

/// Render a single slide page showing `canvas` edge to edge.
///
/// The page is `canvas` pixels converted to points at `dpi`.
pub fn render_slide_page(
    output: &mut Document,
    canvas: &RgbImage,
    quality: u8,
    dpi: f32,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let width_pt = px_to_pt(canvas.width(), dpi);
    let height_pt = px_to_pt(canvas.height(), dpi);

    let image_id = create_image_xobject(output, canvas, quality)?;

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q\n", width_pt, height_pt);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));

    Ok(output.add_object(page_dict))
}

/// Build a PDF with one page per canvas, in order.
pub fn render_pdf(canvases: &[RgbImage], quality: u8, dpi: f32, title: &str) -> Result<Document> {
    if canvases.is_empty() {
        return Err(CarouselError::NoImages);
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(canvases.len());

    for canvas in canvases {
        let page_id = render_slide_page(&mut output, canvas, quality, dpi, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    let info_id = output.add_object(info_dictionary(title));
    output.trailer.set("Info", info_id);

    Ok(output)
}

fn info_dictionary(title: &str) -> Dictionary {
    let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
    Dictionary::from_iter(vec![
        ("Title", text_string(title)),
        ("Producer", text_string(PDF_PRODUCER)),
        ("CreationDate", text_string(&created)),
    ])
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
