//! Canvas normalization
//!
//! Turns an arbitrary decoded image into a fixed-size opaque slide:
//! 1. Flatten any transparency over the background color
//! 2. Fit into the inner box (contain or cover)
//! 3. Paste centered onto a fresh background canvas

use crate::layout::plan_fit;
use crate::types::*;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

/// Resampling filter used for every resize
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Whether a source needs alpha compositing before it can be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// No alpha channel, converts straight to RGB
    Opaque,
    /// RGBA, gray+alpha, or palette-with-transparency (expanded by the decoder)
    AlphaBearing,
}

impl SourceKind {
    pub fn classify(image: &DynamicImage) -> Self {
        if image.color().has_alpha() {
            SourceKind::AlphaBearing
        } else {
            SourceKind::Opaque
        }
    }
}

/// Normalize `source` onto a canvas described by `layout`.
///
/// The result is always exactly `layout.size` and has no alpha channel.
pub fn normalize(source: &DynamicImage, layout: &CanvasLayout) -> Result<RgbImage> {
    let size = layout.size;
    if size.width == 0 || size.height == 0 {
        return Err(CarouselError::Config(format!(
            "Canvas size must be at least 1x1 (got {})",
            size
        )));
    }
    if source.width() == 0 || source.height() == 0 {
        return Err(CarouselError::Config("Source image is empty".to_string()));
    }

    let flat = flatten(source, layout.background);
    let plan = plan_fit(flat.dimensions(), layout);

    log::debug!(
        "{}x{} -> crop {:?} -> {}x{} at ({}, {})",
        flat.width(),
        flat.height(),
        plan.crop,
        plan.scaled.0,
        plan.scaled.1,
        plan.placement.x,
        plan.placement.y
    );

    let cropped = if plan.crop.size() == flat.dimensions() {
        flat
    } else {
        imageops::crop_imm(
            &flat,
            plan.crop.x,
            plan.crop.y,
            plan.crop.width,
            plan.crop.height,
        )
        .to_image()
    };

    let fitted = if cropped.dimensions() == plan.scaled {
        cropped
    } else {
        imageops::resize(&cropped, plan.scaled.0, plan.scaled.1, RESAMPLE_FILTER)
    };

    let mut canvas = RgbImage::from_pixel(size.width, size.height, layout.background.into());
    imageops::replace(
        &mut canvas,
        &fitted,
        plan.placement.x as i64,
        plan.placement.y as i64,
    );

    Ok(canvas)
}

/// Produce an opaque RGB copy of `source`, compositing alpha over `background`.
pub fn flatten(source: &DynamicImage, background: Rgb) -> RgbImage {
    match SourceKind::classify(source) {
        SourceKind::Opaque => source.to_rgb8(),
        SourceKind::AlphaBearing => composite_over(&source.to_rgba8(), background),
    }
}

fn composite_over(rgba: &RgbaImage, background: Rgb) -> RgbImage {
    let bg = background.to_array();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        image::Rgb([
            blend(r, bg[0], a),
            blend(g, bg[1], a),
            blend(b, bg[2], a),
        ])
    })
}

#[inline]
fn blend(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(10, 200, 255), 10);
        assert_eq!(blend(10, 200, 0), 200);
        assert_eq!(blend(0, 255, 128), 127);
    }

    #[test]
    fn classify_by_channel_layout() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let rgba = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let la = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(2, 2));
        let luma = DynamicImage::ImageLuma8(image::GrayImage::new(2, 2));
        assert_eq!(SourceKind::classify(&rgb), SourceKind::Opaque);
        assert_eq!(SourceKind::classify(&luma), SourceKind::Opaque);
        assert_eq!(SourceKind::classify(&rgba), SourceKind::AlphaBearing);
        assert_eq!(SourceKind::classify(&la), SourceKind::AlphaBearing);
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let src = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let layout = CanvasLayout {
            size: CanvasSize::new(0, 10),
            ..Default::default()
        };
        assert!(matches!(
            normalize(&src, &layout),
            Err(CarouselError::Config(_))
        ));
    }
}
