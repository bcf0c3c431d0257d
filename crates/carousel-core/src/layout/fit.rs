//! Fit computations for contain and cover modes

use crate::types::{CanvasLayout, FitMode};

use super::{FitPlan, PixelRect};

/// Usable area after reserving `margin` on every side.
///
/// Never collapses below 1x1, even when the margin eats the whole canvas.
pub fn inner_box(width: u32, height: u32, margin: u32) -> (u32, u32) {
    let inset = margin.saturating_mul(2);
    (
        width.saturating_sub(inset).max(1),
        height.saturating_sub(inset).max(1),
    )
}

/// Largest size with the source's aspect ratio that fits inside `bounds`.
///
/// One axis always matches `bounds` exactly; the other is rounded and
/// clamped to `1..=bound`. Small sources are scaled up.
pub fn contain_size(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = (source.0 as u64, source.1 as u64);
    let (box_w, box_h) = (bounds.0 as u64, bounds.1 as u64);

    // Compare src_w / src_h against box_w / box_h without floats
    let lhs = src_w * box_h;
    let rhs = box_w * src_h;

    if lhs == rhs {
        bounds
    } else if lhs > rhs {
        // Wider than the box: width is the tight axis
        let h = div_round(src_h * box_w, src_w).clamp(1, box_h);
        (bounds.0, h as u32)
    } else {
        let w = div_round(src_w * box_h, src_h).clamp(1, box_w);
        (w as u32, bounds.1)
    }
}

/// Centered window of `source` with the aspect ratio of `bounds`.
///
/// Scaling this window to `bounds` is the same as scaling the whole source
/// by the larger axis ratio and cropping the overflow evenly on both sides.
pub fn cover_crop(source: (u32, u32), bounds: (u32, u32)) -> PixelRect {
    let (src_w, src_h) = (source.0 as u64, source.1 as u64);
    let (box_w, box_h) = (bounds.0 as u64, bounds.1 as u64);

    let lhs = src_w * box_h;
    let rhs = box_w * src_h;

    let (crop_w, crop_h) = if lhs == rhs {
        (src_w, src_h)
    } else if lhs > rhs {
        // Too wide: keep full height, trim the sides
        (div_round(src_h * box_w, box_h).clamp(1, src_w), src_h)
    } else {
        // Too tall: keep full width, trim top and bottom
        (src_w, div_round(src_w * box_h, box_w).clamp(1, src_h))
    };

    PixelRect::new(
        ((src_w - crop_w) / 2) as u32,
        ((src_h - crop_h) / 2) as u32,
        crop_w as u32,
        crop_h as u32,
    )
}

/// Top-left offset that centers `inner` on `outer`.
///
/// Uses floor division, so odd differences leave the extra pixel on the
/// right/bottom.
pub fn centered_offset(outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}

/// Full placement plan for a source of `source` pixels under `layout`.
pub fn plan_fit(source: (u32, u32), layout: &CanvasLayout) -> FitPlan {
    let canvas = (layout.size.width, layout.size.height);
    let inner = inner_box(canvas.0, canvas.1, layout.margin);

    let (crop, scaled) = match layout.fit {
        FitMode::Contain => (
            PixelRect::new(0, 0, source.0, source.1),
            contain_size(source, inner),
        ),
        FitMode::Cover => (cover_crop(source, inner), inner),
    };

    let (x, y) = centered_offset(canvas, scaled);

    FitPlan {
        crop,
        scaled,
        placement: PixelRect::new(x, y, scaled.0, scaled.1),
    }
}

/// Integer division rounding half away from zero
fn div_round(num: u64, den: u64) -> u64 {
    (num + den / 2) / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CanvasSize, Rgb};

    fn layout(width: u32, height: u32, fit: FitMode, margin: u32) -> CanvasLayout {
        CanvasLayout {
            size: CanvasSize::new(width, height),
            fit,
            background: Rgb::WHITE,
            margin,
        }
    }

    #[test]
    fn inner_box_subtracts_both_sides() {
        assert_eq!(inner_box(1080, 1350, 40), (1000, 1270));
        assert_eq!(inner_box(1080, 1350, 0), (1080, 1350));
    }

    #[test]
    fn inner_box_never_collapses() {
        assert_eq!(inner_box(100, 100, 50), (1, 1));
        assert_eq!(inner_box(100, 300, 80), (1, 140));
        assert_eq!(inner_box(10, 10, u32::MAX), (1, 1));
    }

    #[test]
    fn contain_landscape_into_portrait() {
        assert_eq!(contain_size((2000, 1000), (1080, 1350)), (1080, 540));
    }

    #[test]
    fn contain_portrait_into_square() {
        assert_eq!(contain_size((600, 1200), (1080, 1080)), (540, 1080));
    }

    #[test]
    fn contain_upscales_small_sources() {
        assert_eq!(contain_size((100, 50), (1000, 1000)), (1000, 500));
    }

    #[test]
    fn contain_same_aspect_is_exact() {
        assert_eq!(contain_size((216, 270), (1080, 1350)), (1080, 1350));
    }

    #[test]
    fn contain_extreme_aspect_keeps_one_pixel() {
        assert_eq!(contain_size((10000, 1), (100, 100)), (100, 1));
        assert_eq!(contain_size((1, 10000), (100, 100)), (1, 100));
    }

    #[test]
    fn cover_crop_trims_wide_source() {
        // 2000x1000 into 1080x1350: keep height 1000, width 1000*1080/1350 = 800
        let crop = cover_crop((2000, 1000), (1080, 1350));
        assert_eq!(crop, PixelRect::new(600, 0, 800, 1000));
    }

    #[test]
    fn cover_crop_trims_tall_source() {
        let crop = cover_crop((1000, 3000), (1000, 1000));
        assert_eq!(crop, PixelRect::new(0, 1000, 1000, 1000));
    }

    #[test]
    fn cover_crop_same_aspect_keeps_everything() {
        let crop = cover_crop((540, 675), (1080, 1350));
        assert_eq!(crop, PixelRect::new(0, 0, 540, 675));
    }

    #[test]
    fn centered_offset_floors_odd_differences() {
        assert_eq!(centered_offset((101, 101), (100, 100)), (0, 0));
        assert_eq!(centered_offset((1080, 1350), (1080, 540)), (0, 405));
        assert_eq!(centered_offset((10, 10), (7, 4)), (1, 3));
    }

    #[test]
    fn plan_cover_fills_inner_box() {
        let plan = plan_fit((2000, 1000), &layout(1080, 1350, FitMode::Cover, 40));
        assert_eq!(plan.scaled, (1000, 1270));
        assert_eq!(plan.placement, PixelRect::new(40, 40, 1000, 1270));
    }

    #[test]
    fn plan_contain_keeps_whole_source() {
        let plan = plan_fit((2000, 1000), &layout(1080, 1350, FitMode::Contain, 0));
        assert_eq!(plan.crop, PixelRect::new(0, 0, 2000, 1000));
        assert_eq!(plan.scaled, (1080, 540));
        assert_eq!(plan.placement, PixelRect::new(0, 405, 1080, 540));
    }
}
