//! PDF rendering for carousels
//!
//! This module handles all PDF-specific operations:
//! - JPEG-encoding canvases into image XObjects
//! - Building one page per slide
//! - Assembling the page tree, catalog and info dictionary

mod page;
mod xobject;

pub use page::{render_pdf, render_slide_page};
pub use xobject::{create_image_xobject, encode_jpeg};
