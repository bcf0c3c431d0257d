//! Shared constants for carousel generation
//!
//! This module centralizes defaults and unit conversions used across
//! normalization, export and PDF assembly.

// =============================================================================
// Unit Conversion
// =============================================================================

/// PDF user space units per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert a pixel length to points at the given resolution
#[inline]
pub fn px_to_pt(px: u32, dpi: f32) -> f32 {
    px as f32 * POINTS_PER_INCH / dpi
}

// =============================================================================
// Output Defaults
// =============================================================================

/// Resolution written into the PDF page geometry
pub const DEFAULT_RESOLUTION_DPI: f32 = 300.0;

/// JPEG quality shared by slide export and PDF embedding
pub const DEFAULT_QUALITY: u8 = 92;

/// Valid JPEG quality range
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 95;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "carousel.pdf";

/// Default canvas background
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// =============================================================================
// Discovery
// =============================================================================

/// Extensions (lowercase, without dot) picked up from inputs
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

// =============================================================================
// Export
// =============================================================================

/// File name prefix for exported slides (`slide_01.jpg`, ...)
pub const SLIDE_PREFIX: &str = "slide_";

/// Extension for exported slides
pub const SLIDE_EXTENSION: &str = "jpg";

/// Producer string written to the PDF Info dictionary
pub const PDF_PRODUCER: &str = concat!("carousel-pdf ", env!("CARGO_PKG_VERSION"));
