//! XObject creation for slide images

use crate::types::Result;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Encode an opaque canvas as baseline JPEG at `quality` (1-100).
pub fn encode_jpeg(canvas: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(canvas)?;
    Ok(bytes)
}

/// Embed `canvas` as a DCT-compressed image XObject and return its id.
pub fn create_image_xobject(
    output: &mut Document,
    canvas: &RgbImage,
    quality: u8,
) -> Result<ObjectId> {
    let jpeg = encode_jpeg(canvas, quality)?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(canvas.width() as i64));
    dict.set("Height", Object::Integer(canvas.height() as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));

    // Already compressed, keep Document::compress away from it
    let stream = Stream::new(dict, jpeg).with_compression(false);
    Ok(output.add_object(stream))
}
