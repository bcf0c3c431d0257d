pub mod color;
pub mod constants;
pub mod discover;
pub mod layout;
pub mod normalize;
pub mod render;
mod carousel;
mod io;
mod options;
mod progress;
mod types;

pub use carousel::{build_carousel, normalize_all};
pub use color::parse_color;
pub use discover::{find_images, natural_cmp};
pub use io::{export_slides, load_image, save_pdf, slide_file_name};
pub use normalize::{SourceKind, flatten, normalize};
pub use options::*;
pub use progress::*;
pub use render::render_pdf;
pub use types::*;
